//! Stylesheet compilation for quoin.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Themes ship their stylesheets as SCSS; the build compiles them to CSS
//! with grass and writes the result next to the built pages. The compiled
//! output always opens with a `@charset "UTF-8";` prologue.

mod compile;
mod error;

pub use compile::{build_css, compile_file, compile_str};
pub use error::{SassError, SassResult};
