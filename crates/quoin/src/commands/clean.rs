//! `quoin clean` - remove build outputs.

use anyhow::Result;
use quoin_core::{BuildConfig, Website};

pub fn execute() -> Result<()> {
    let website = Website::discover(BuildConfig::default())?;
    website.clean()?;
    Ok(())
}
