//! `quoin init` - initialize a project in the current directory.

use anyhow::Result;
use quoin_core::{BuildConfig, init_site};

pub fn execute() -> Result<()> {
    let cwd = std::env::current_dir()?;
    init_site(&cwd, &BuildConfig::default())?;
    println!("Initialized site in {}", cwd.display());
    Ok(())
}
