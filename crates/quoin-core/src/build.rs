/*
 * build.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Site build pipeline for quoin.
 */

//! The site build pipeline.
//!
//! A build walks the project's content groups, composes and renders each
//! page, writes `index.html` per url under the build directory, copies page
//! assets, and compiles the theme stylesheet. Every build starts from a
//! clean build directory and recomputes everything; the first failing page
//! aborts the whole build.

use std::fs;
use std::path::{Path, PathBuf};

use quoin_spec::{SpecMap, SpecValue};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::{BuildConfig, CONTENT_GROUP_KEY, GROUP_HOME, GROUP_PAGES, GROUP_POSTS};
use crate::error::{CoreError, Result};
use crate::page::page_html;
use crate::pagespec::{merge_layers, page_spec};
use crate::project::{DEFAULT_STYLESHEET, ProjectContext, find_site_root, load_spec_file};

/// A website project, ready to build.
#[derive(Debug)]
pub struct Website {
    pub project: ProjectContext,
}

impl Website {
    /// Discover the project from the current directory.
    pub fn discover(cfg: BuildConfig) -> Result<Self> {
        Ok(Self {
            project: ProjectContext::discover(cfg)?,
        })
    }

    /// Open a project at a known site root.
    pub fn open(
        site_dir: impl Into<PathBuf>,
        build_dir: Option<PathBuf>,
        cfg: BuildConfig,
    ) -> Result<Self> {
        Ok(Self {
            project: ProjectContext::open(site_dir, build_dir, cfg)?,
        })
    }

    /// Build the whole site from scratch.
    pub fn build(&self) -> Result<()> {
        let project = &self.project;
        let cfg = &project.cfg;

        if project.build_dir.exists() {
            protected_remove(&project.build_dir, &[cfg.build_dirname.as_str()], cfg)?;
        }
        fs::create_dir_all(&project.build_dir)?;

        let specs = merge_layers(&[&project.theme, &project.site]);
        for (group, group_dir) in self.content_groups()? {
            for (url, source_dir) in find_pages(&group, &group_dir)? {
                self.build_page(&url, &source_dir, &specs)?;
            }
        }

        self.build_stylesheets()?;
        Ok(())
    }

    /// Remove the build directory.
    pub fn clobber(&self) -> Result<()> {
        let cfg = &self.project.cfg;
        protected_remove(&self.project.build_dir, &[cfg.build_dirname.as_str()], cfg)
    }

    /// Remove the build directory if present.
    pub fn clean(&self) -> Result<()> {
        if self.project.build_dir.exists() {
            self.clobber()
        } else {
            info!("clean: no build dir");
            Ok(())
        }
    }

    /// The content groups to build: declared under `content_group` in the
    /// site spec, or discovered from the immediate subdirectories of the
    /// content dir.
    fn content_groups(&self) -> Result<Vec<(String, PathBuf)>> {
        let project = &self.project;
        let cfg = &project.cfg;
        let content_dir = project.site_dir.join(&cfg.content_dirname);

        if let Some(groups) = project
            .site
            .get(CONTENT_GROUP_KEY)
            .and_then(SpecValue::as_map)
        {
            let mut out = Vec::new();
            for (group, dirname) in groups.iter() {
                if ![GROUP_HOME, GROUP_PAGES, GROUP_POSTS].contains(&group.as_str()) {
                    return Err(CoreError::InvalidContentGroup {
                        name: group.clone(),
                    });
                }
                let dir = match dirname.as_str() {
                    Some(dirname) => project.site_dir.join(dirname),
                    None => content_dir.join(group),
                };
                out.push((group.clone(), dir));
            }
            return Ok(out);
        }

        let mut out = Vec::new();
        for entry in fs::read_dir(&content_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                out.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
            }
        }
        out.sort();
        Ok(out)
    }

    fn build_page(&self, url: &str, source_dir: &Path, specs: &SpecMap) -> Result<()> {
        let project = &self.project;
        let cfg = &project.cfg;
        info!(url, "build page");

        // A per-page spec file is the content layer of the overlay.
        let page_layer = load_spec_file(&source_dir.join(&cfg.page_specs_file))?;
        let spec = match &page_layer {
            Some(layer) => page_spec(url, &merge_layers(&[&project.theme, &project.site, layer]))?,
            None => page_spec(url, specs)?,
        };

        let html = page_html(source_dir, spec.as_ref(), cfg)?;

        let target_dir = project.build_dir.join(url.trim_start_matches('/'));
        fs::create_dir_all(&target_dir)?;
        fs::write(target_dir.join(&cfg.index_basename), html)?;

        copy_page_assets(source_dir, &target_dir)?;
        Ok(())
    }

    fn build_stylesheets(&self) -> Result<()> {
        let project = &self.project;
        let cfg = &project.cfg;
        let target = project.build_dir.join(&cfg.stylesheet_target);

        match &project.theme_dir {
            Some(theme_dir) => {
                let source = theme_dir.join(&cfg.stylesheet_source);
                if source.is_file() {
                    quoin_sass::build_css(&source, &target)?;
                } else {
                    info!("theme has no stylesheet entry, skipping");
                }
            }
            None => {
                // The embedded default theme ships its own stylesheet.
                let css = quoin_sass::compile_str(DEFAULT_STYLESHEET)?;
                fs::write(&target, css)?;
            }
        }
        Ok(())
    }
}

/// Pages of one content group: `home` is a single page at the site root;
/// every directory under another group's dir is a page, url'd by its
/// relative path.
fn find_pages(group: &str, group_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    info!(group, dir = %group_dir.display(), "build content group");
    if group == GROUP_HOME {
        return Ok(vec![("/".to_string(), group_dir.to_path_buf())]);
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(group_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(group_dir)
            .expect("walked entries live under the group dir");
        pages.push((page_url(rel), entry.path().to_path_buf()));
    }
    Ok(pages)
}

fn page_url(rel: &Path) -> String {
    let mut url = String::from("/");
    for (i, component) in rel.components().enumerate() {
        if i > 0 {
            url.push('/');
        }
        url.push_str(&component.as_os_str().to_string_lossy());
    }
    url
}

fn copy_page_assets(source_dir: &Path, target_dir: &Path) -> Result<()> {
    for entry in WalkDir::new(source_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let is_css = entry.path().extension().and_then(|e| e.to_str()) == Some("css");
        if entry.file_type().is_file() && is_css {
            debug!(asset = %entry.path().display(), "copy page asset");
            fs::copy(entry.path(), target_dir.join(entry.file_name()))?;
        }
    }
    Ok(())
}

/// Guarded removal for build outputs.
///
/// Refuses to remove: any ancestor of the current directory, a path whose
/// basename is not one of `valid_basenames`, a path outside a quoin
/// project, or a path that does not exist.
pub fn protected_remove(path: &Path, valid_basenames: &[&str], cfg: &BuildConfig) -> Result<()> {
    let cwd = std::env::current_dir()?;
    if cwd.starts_with(path) {
        return Err(CoreError::PathNotAllowed {
            path: path.to_path_buf(),
            protected: cwd,
        });
    }

    if !valid_basenames.is_empty() {
        let basename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if !valid_basenames.contains(&basename) {
            return Err(CoreError::BasenameNotAllowed {
                path: path.to_path_buf(),
                basename: basename.to_string(),
            });
        }
    }

    let parent = path.parent().unwrap_or(path);
    find_site_root(parent, cfg)?;

    if !path.exists() {
        return Err(CoreError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), "remove");
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_url_from_relative_path() {
        assert_eq!(page_url(Path::new("about")), "/about");
        assert_eq!(page_url(Path::new("blog/first-post")), "/blog/first-post");
    }

    #[test]
    fn test_find_pages_home_group() {
        let pages = find_pages(GROUP_HOME, Path::new("/site/content/home")).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, "/");
    }

    #[test]
    fn test_find_pages_directory_per_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("about")).unwrap();
        fs::create_dir_all(dir.path().join("blog/first-post")).unwrap();

        let pages = find_pages(GROUP_PAGES, dir.path()).unwrap();
        let urls: Vec<_> = pages.iter().map(|(url, _)| url.as_str()).collect();
        assert_eq!(urls, vec!["/about", "/blog", "/blog/first-post"]);
    }

    #[test]
    fn test_protected_remove_requires_project() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = BuildConfig::default();
        let build = dir.path().join("build");
        fs::create_dir_all(&build).unwrap();

        // No project marker anywhere above: refused.
        assert!(matches!(
            protected_remove(&build, &["build"], &cfg),
            Err(CoreError::ProjectNotFound { .. })
        ));

        fs::create_dir_all(dir.path().join(&cfg.project_marker)).unwrap();
        protected_remove(&build, &["build"], &cfg).unwrap();
        assert!(!build.exists());
    }

    #[test]
    fn test_protected_remove_checks_basename() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = BuildConfig::default();
        fs::create_dir_all(dir.path().join(&cfg.project_marker)).unwrap();
        let precious = dir.path().join("content");
        fs::create_dir_all(&precious).unwrap();

        assert!(matches!(
            protected_remove(&precious, &["build"], &cfg),
            Err(CoreError::BasenameNotAllowed { .. })
        ));
        assert!(precious.exists());
    }

    #[test]
    fn test_protected_remove_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = BuildConfig::default();
        fs::create_dir_all(dir.path().join(&cfg.project_marker)).unwrap();

        assert!(matches!(
            protected_remove(&dir.path().join("build"), &["build"], &cfg),
            Err(CoreError::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_content_group_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = BuildConfig::default();
        fs::create_dir_all(dir.path().join(&cfg.project_marker)).unwrap();
        fs::write(
            dir.path().join(&cfg.site_file),
            "content_group:\n  gallery: null\n",
        )
        .unwrap();

        let website = Website::open(dir.path(), None, cfg).unwrap();
        assert!(matches!(
            website.build(),
            Err(CoreError::InvalidContentGroup { name }) if name == "gallery"
        ));
    }
}
