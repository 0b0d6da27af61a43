/*
 * content.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Content loading and merging for quoin.
 */

//! Content loading and merging.
//!
//! Source content comes from fragment files in a page's source directory
//! (stem prefixed with `_`, extension `.html` or `.md`; markdown is
//! converted on load). Merging validates the fragments against the page
//! spec's closed `content` schema and overlays vars, data, and navigation
//! state on top of the declared defaults.

use std::path::Path;

use quoin_spec::{SpecMap, SpecValue};
use quoin_template::Content;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::BuildConfig;
use crate::error::{CoreError, Result};

const CONTENT: &str = "content";
const VARS: &str = "vars";
const DATA: &str = "data";
const NAVLINKS: &str = "navlinks";

/// Load content fragments from a page source directory.
///
/// Files whose stem starts with the configured content prefix and whose
/// extension is an accepted content extension become fragments, keyed by
/// stem minus the prefix. Markdown fragments are converted to HTML.
pub fn source_content(source_dir: &Path, cfg: &BuildConfig) -> Result<Content> {
    debug!(dir = %source_dir.display(), "load source content");
    let mut content = Content::new();
    for entry in WalkDir::new(source_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !stem.starts_with(&cfg.content_prefix) {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        if !cfg.content_extensions.contains(&ext) {
            continue;
        }

        let key = stem.trim_start_matches(&cfg.content_prefix).to_string();
        let text = std::fs::read_to_string(path)?;
        let html = match ext.as_str() {
            ".html" => text,
            ".md" => comrak::markdown_to_html(&text, &comrak::Options::default()),
            _ => {
                return Err(CoreError::ContentFile {
                    path: path.to_path_buf(),
                });
            }
        };
        info!(file = %path.display(), key = %key, "content fragment");
        content.insert(key, html);
    }
    Ok(content)
}

/// Validate and merge source content with the page spec.
///
/// The page spec's `content` category is a closed schema: a null default
/// with no source fragment is [`CoreError::MissingContent`], a source
/// fragment with no declared key is [`CoreError::UnusedContent`]. The merged
/// mapping starts from the declared defaults and overlays, in order: source
/// content, vars, data, and navlinks. Later overlays win.
pub fn merge_content(source_content: &Content, spec: &SpecMap) -> Result<Content> {
    let empty = SpecMap::new();
    let defaults = category(spec, CONTENT).unwrap_or(&empty);

    let missing: Vec<String> = defaults
        .iter()
        .filter(|(key, value)| value.is_null() && !source_content.contains_key(*key))
        .map(|(key, _)| key.clone())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::MissingContent { keys: missing });
    }

    let unused: Vec<String> = source_content
        .keys()
        .filter(|key| !defaults.contains_key(*key))
        .cloned()
        .collect();
    if !unused.is_empty() {
        return Err(CoreError::UnusedContent { keys: unused });
    }

    let mut content: Content = defaults
        .iter()
        .map(|(key, value)| (key.clone(), scalar_or_empty(value)))
        .collect();
    debug!(keys = ?content.keys().collect::<Vec<_>>(), "content defaults from spec");

    for (key, value) in source_content.iter() {
        content.insert(key.clone(), value.clone());
    }

    for (key, value) in get_vars(spec, VARS)? {
        content.insert(key, value);
    }

    for (key, value) in get_vars(spec, DATA)? {
        content.insert(key, value);
    }

    if let Some(navlinks) = category(spec, NAVLINKS) {
        for (key, value) in navlinks.iter() {
            content.insert(key.clone(), scalar_or_empty(value));
        }
    }

    Ok(content)
}

/// Read a variable category from the page spec.
///
/// Every declared variable must carry a value; nulls are collected into
/// [`CoreError::MissingVars`]. A missing category reads as empty.
pub fn get_vars(spec: &SpecMap, name: &str) -> Result<Content> {
    let Some(vars) = category(spec, name) else {
        return Ok(Content::new());
    };
    let missing: Vec<String> = vars
        .iter()
        .filter(|(_, value)| value.is_null())
        .map(|(key, _)| key.clone())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::MissingVars { names: missing });
    }
    Ok(vars
        .iter()
        .map(|(key, value)| (key.clone(), scalar_or_empty(value)))
        .collect())
}

fn category<'a>(spec: &'a SpecMap, name: &str) -> Option<&'a SpecMap> {
    spec.get(name).and_then(SpecValue::as_map)
}

fn scalar_or_empty(value: &SpecValue) -> String {
    value.as_str().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quoin_spec::load_spec;

    fn fragments(entries: &[(&str, &str)]) -> Content {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_content_rejected() {
        let spec = load_spec("content:\n  title: null\n").unwrap();
        assert!(matches!(
            merge_content(&Content::new(), &spec),
            Err(CoreError::MissingContent { keys }) if keys == vec!["title"]
        ));
    }

    #[test]
    fn test_unused_content_rejected() {
        let spec = load_spec("content:\n  title: null\n").unwrap();
        let source = fragments(&[("title", "t"), ("extra", "x")]);
        assert!(matches!(
            merge_content(&source, &spec),
            Err(CoreError::UnusedContent { keys }) if keys == vec!["extra"]
        ));
    }

    #[test]
    fn test_defaults_overlaid_by_source() {
        let spec = load_spec("content:\n  title: Default Title\n  main: null\n").unwrap();
        let source = fragments(&[("main", "<p>body</p>")]);
        let content = merge_content(&source, &spec).unwrap();
        assert_eq!(content.get("title").unwrap(), "Default Title");
        assert_eq!(content.get("main").unwrap(), "<p>body</p>");

        let source = fragments(&[("main", "<p>body</p>"), ("title", "Override")]);
        let content = merge_content(&source, &spec).unwrap();
        assert_eq!(content.get("title").unwrap(), "Override");
    }

    #[test]
    fn test_vars_and_navlinks_overlay() {
        let spec = load_spec(concat!(
            "content:\n  title: null\n",
            "vars:\n  lang: en\n  title: From Vars\n",
            "navlinks:\n  home: /\n",
        ))
        .unwrap();
        let source = fragments(&[("title", "From Source")]);
        let content = merge_content(&source, &spec).unwrap();
        // vars overlay source content on key collision
        assert_eq!(content.get("title").unwrap(), "From Vars");
        assert_eq!(content.get("lang").unwrap(), "en");
        assert_eq!(content.get("home").unwrap(), "/");
    }

    #[test]
    fn test_missing_vars_rejected() {
        let spec = load_spec("content: {}\nvars:\n  lang: null\n").unwrap();
        assert!(matches!(
            merge_content(&Content::new(), &spec),
            Err(CoreError::MissingVars { names }) if names == vec!["lang"]
        ));
    }

    #[test]
    fn test_missing_data_rejected() {
        let spec = load_spec("content: {}\ndata:\n  website: null\n").unwrap();
        assert!(matches!(
            merge_content(&Content::new(), &spec),
            Err(CoreError::MissingVars { names }) if names == vec!["website"]
        ));
    }

    #[test]
    fn test_source_content_from_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_main.md"), "# Hello\n\nBody text.\n").unwrap();
        std::fs::write(dir.path().join("_aside.html"), "<aside>raw</aside>\n").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored, no prefix\n").unwrap();
        std::fs::write(dir.path().join("_skip.txt"), "ignored, bad extension\n").unwrap();

        let content = source_content(dir.path(), &BuildConfig::default()).unwrap();
        assert_eq!(content.len(), 2);
        assert!(content.get("main").unwrap().contains("<h1>Hello</h1>"));
        assert_eq!(content.get("aside").unwrap(), "<aside>raw</aside>\n");
    }
}
