/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template composition and placeholder rendering for quoin.
//!
//! This crate turns a resolved page spec into markup in two steps:
//!
//! 1. [`compose_template`] walks the spec's layout tree, expanding nested
//!    layouts through their partial format strings into a single template
//!    string that still carries `{key}` tokens for every leaf content slot.
//! 2. [`render`] substitutes merged page content into that template in
//!    exactly two passes; the second pass resolves one level of indirection
//!    for content values that themselves carry `{key}` tokens.
//!
//! The placeholder language is deliberately tiny: single-level
//! `{identifier}` tokens, with `{{` and `}}` escaping literal braces. There
//! are no conditionals, loops, or nested expressions.
//!
//! # Example
//!
//! ```ignore
//! use quoin_template::{compose_template, render, Content};
//!
//! let template = compose_template(&page_spec)?;
//! let html = render(&template, &content)?;
//! ```

pub mod compose;
pub mod error;
pub mod render;
pub mod subst;

pub use compose::{compose_partials, compose_template};
pub use error::{TemplateError, TemplateResult};
pub use render::{Content, render};
pub use subst::substitute;
