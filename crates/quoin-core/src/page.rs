/*
 * page.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-page HTML assembly for quoin.
 */

//! Per-page HTML assembly.

use std::path::Path;

use quoin_spec::SpecMap;
use quoin_template::{Content, compose_template, render};
use tracing::debug;

use crate::config::BuildConfig;
use crate::content::{merge_content, source_content};
use crate::error::{CoreError, Result};
use crate::html::{load_index_page, prettify};

/// Produce the HTML for one page.
///
/// A raw `index.html` in the source directory is used verbatim. Otherwise
/// the page spec drives the template/content path: compose the template,
/// load and merge the source fragments, render, pretty-print. With neither
/// a raw page nor a page spec there is nothing to build.
pub fn page_html(source_dir: &Path, page_spec: Option<&SpecMap>, cfg: &BuildConfig) -> Result<String> {
    if !source_dir.is_dir() {
        return Err(CoreError::SourceDirNotFound {
            path: source_dir.to_path_buf(),
        });
    }
    debug!(dir = %source_dir.display(), "assemble page");

    if let Some(raw) = load_index_page(source_dir, cfg)? {
        return Ok(raw);
    }

    let Some(spec) = page_spec else {
        return Err(CoreError::NoPageSource {
            path: source_dir.to_path_buf(),
        });
    };

    let template = compose_template(spec)?;
    let fragments = source_content(source_dir, cfg)?;
    let content = merge_content(&fragments, spec)?;
    render_html(&template, &content, cfg)
}

/// Render merged content into a template and pretty-print the result.
pub fn render_html(template: &str, content: &Content, cfg: &BuildConfig) -> Result<String> {
    let rendered = render(template, content)?;
    Ok(prettify(&rendered, cfg.pretty_indent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoin_spec::load_spec;

    #[test]
    fn test_raw_index_page_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>raw page</p>").unwrap();
        let cfg = BuildConfig::default();
        // Even with no spec at all, the raw page is used untouched.
        let html = page_html(dir.path(), None, &cfg).unwrap();
        assert_eq!(html, "<p>raw page</p>");
    }

    #[test]
    fn test_missing_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let cfg = BuildConfig::default();
        assert!(matches!(
            page_html(&missing, None, &cfg),
            Err(CoreError::SourceDirNotFound { .. })
        ));
    }

    #[test]
    fn test_no_spec_and_no_raw_page() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = BuildConfig::default();
        assert!(matches!(
            page_html(dir.path(), None, &cfg),
            Err(CoreError::NoPageSource { .. })
        ));
    }

    #[test]
    fn test_spec_driven_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_main.md"), "page body\n").unwrap();
        let spec = load_spec(concat!(
            "layouts:\n",
            "  doc:\n",
            "    main: null\n",
            "partials:\n",
            "  main: \"<main>{partial}</main>\"\n",
            "content:\n",
            "  main: null\n",
        ))
        .unwrap();
        let cfg = BuildConfig::default();
        let html = page_html(dir.path(), Some(&spec), &cfg).unwrap();
        assert!(html.contains("<main>"));
        assert!(html.contains("page body"));
    }
}
