//! `quoin clobber` - clobber the build, removing everything.

use anyhow::{Context, Result};
use quoin_core::{BuildConfig, Website};

pub fn execute() -> Result<()> {
    let website = Website::discover(BuildConfig::default())?;
    website
        .clobber()
        .with_context(|| format!("clobber: {}", website.project.build_dir.display()))?;
    Ok(())
}
