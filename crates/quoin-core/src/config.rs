/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Build configuration for quoin.
 */

//! Build configuration.
//!
//! Every file and directory name the pipeline touches is carried in one
//! explicit [`BuildConfig`] threaded through calls, rather than in
//! process-wide constants.

use std::path::PathBuf;

/// The `home` content group: a single page at the site root.
pub const GROUP_HOME: &str = "home";
/// The `pages` content group: one page per subdirectory.
pub const GROUP_PAGES: &str = "pages";
/// The `posts` content group: one post per subdirectory.
pub const GROUP_POSTS: &str = "posts";

/// Site spec key declaring the content groups to build.
pub const CONTENT_GROUP_KEY: &str = "content_group";

/// Names and knobs for one site build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory marking the site root (`.quoin`).
    pub project_marker: String,

    /// Site spec file at the site root (`site.yaml`).
    pub site_file: String,

    /// Theme spec file in a theme directory (`theme.yaml`).
    pub theme_file: String,

    /// Optional per-page spec file in a page source directory
    /// (`pagespecs.yaml`), the content layer of the spec overlay.
    pub page_specs_file: String,

    /// Build output directory name (`build`).
    pub build_dirname: String,

    /// Content root directory name (`content`).
    pub content_dirname: String,

    /// Installed themes directory name (`themes`).
    pub themes_dirname: String,

    /// Theme stylesheet entry point, relative to the theme directory
    /// (`stylesheets/page.scss`).
    pub stylesheet_source: PathBuf,

    /// Compiled stylesheet name in the build dir (`page.css`).
    pub stylesheet_target: String,

    /// Page file name, both for raw sources and built output
    /// (`index.html`).
    pub index_basename: String,

    /// Prefix marking a file as a content fragment (`_`).
    pub content_prefix: String,

    /// Extensions accepted as content fragments (`.html`, `.md`).
    pub content_extensions: Vec<String>,

    /// Indent width for pretty-printed output.
    pub pretty_indent: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            project_marker: ".quoin".to_string(),
            site_file: "site.yaml".to_string(),
            theme_file: "theme.yaml".to_string(),
            page_specs_file: "pagespecs.yaml".to_string(),
            build_dirname: "build".to_string(),
            content_dirname: "content".to_string(),
            themes_dirname: "themes".to_string(),
            stylesheet_source: PathBuf::from("stylesheets/page.scss"),
            stylesheet_target: "page.css".to_string(),
            index_basename: "index.html".to_string(),
            content_prefix: "_".to_string(),
            content_extensions: vec![".html".to_string(), ".md".to_string()],
            pretty_indent: 2,
        }
    }
}
