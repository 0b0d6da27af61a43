//! SCSS to CSS compilation.
//!
//! Copyright (c) 2025 Posit, PBC

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{SassError, SassResult};

/// Compile a standalone SCSS string (expanded output, no load paths).
pub fn compile_str(source: &str) -> SassResult<String> {
    let options = grass::Options::default().style(grass::OutputStyle::Expanded);
    let css = grass::from_string(source.to_string(), &options)
        .map_err(|e| SassError::Compile { message: e.to_string() })?;
    Ok(with_charset(&css))
}

/// Compile an SCSS file; `@import`/`@use` resolve relative to its directory.
pub fn compile_file(source: &Path) -> SassResult<String> {
    let dir = source.parent().unwrap_or_else(|| Path::new("."));
    let options = grass::Options::default()
        .style(grass::OutputStyle::Expanded)
        .load_path(dir);
    let css = grass::from_path(source, &options)
        .map_err(|e| SassError::Compile { message: e.to_string() })?;
    Ok(with_charset(&css))
}

/// Compile `source` and write the result to `target`, creating parent
/// directories as needed.
pub fn build_css(source: &Path, target: &Path) -> SassResult<()> {
    info!(source = %source.display(), target = %target.display(), "build stylesheet");
    let css = compile_file(source)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, css)?;
    Ok(())
}

fn with_charset(css: &str) -> String {
    format!("@charset \"UTF-8\";\n{css}")
}
