//! `quoin new` - create a new website project.

use std::path::Path;

use anyhow::Result;
use quoin_core::{BuildConfig, new_site};

pub fn execute(name: &str) -> Result<()> {
    new_site(Path::new(name), &BuildConfig::default())?;
    println!("Created new site: {name}");
    Ok(())
}
