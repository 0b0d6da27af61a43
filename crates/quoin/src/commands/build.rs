//! `quoin build` - build the website.

use anyhow::Result;
use quoin_core::{BuildConfig, Website};

pub fn execute() -> Result<()> {
    let website = Website::discover(BuildConfig::default())?;
    website.build()?;
    println!("Built site in {}", website.project.build_dir.display());
    Ok(())
}
