//! Core site-building pipeline for quoin.
//!
//! This crate ties the spec model and the template engine into a working
//! static-site build:
//!
//! - [`ProjectContext`] - site root discovery, site/theme spec loading
//! - [`page_spec`] - per-page spec composition with navigation marking
//! - [`merge_content`] - closed-schema content merging
//! - [`page_html`] - raw passthrough or compose/merge/render/prettify
//! - [`Website`] - the whole-site build pipeline
//!
//! # Example
//!
//! ```ignore
//! use quoin_core::{BuildConfig, Website};
//!
//! let website = Website::discover(BuildConfig::default())?;
//! website.build()?;
//! ```

pub mod build;
pub mod config;
pub mod content;
pub mod error;
pub mod html;
pub mod page;
pub mod pagespec;
pub mod project;

pub use build::{Website, protected_remove};
pub use config::{BuildConfig, CONTENT_GROUP_KEY, GROUP_HOME, GROUP_PAGES, GROUP_POSTS};
pub use content::{get_vars, merge_content, source_content};
pub use error::{CoreError, Result};
pub use html::{load_index_page, prettify};
pub use page::{page_html, render_html};
pub use pagespec::{ACTIVE_NAVLINK, NAVLINK, merge_layers, page_spec};
pub use project::{
    DEFAULT_STYLESHEET, DEFAULT_THEME, ProjectContext, STARTER_SITE_FILE, find_site_root,
    init_site, new_site,
};
