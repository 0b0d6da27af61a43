/*
 * project.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Project context for quoin builds.
 */

//! Project context management.
//!
//! A quoin project is a directory carrying the project marker (`.quoin`).
//! The context gathers everything a build needs up front: the site root,
//! the build directory, the loaded site spec, and the resolved theme (a
//! named theme under `themes/`, a site-local `theme.yaml`, or the embedded
//! default).

use std::fs;
use std::path::{Path, PathBuf};

use quoin_spec::{SpecMap, SpecValue, load_spec};
use tracing::{debug, info, warn};

use crate::config::{BuildConfig, GROUP_HOME, GROUP_PAGES};
use crate::error::{CoreError, Result};

/// The embedded default theme spec.
pub const DEFAULT_THEME: &str = include_str!("resources/theme.yaml");

/// The embedded default theme's stylesheet.
pub const DEFAULT_STYLESHEET: &str = include_str!("resources/page.scss");

/// Starter `site.yaml` written by `init` and `new`.
pub const STARTER_SITE_FILE: &str = include_str!("resources/site.yaml");

/// Everything a build needs to know about one project.
#[derive(Debug)]
pub struct ProjectContext {
    /// Build configuration (file and directory names).
    pub cfg: BuildConfig,

    /// Site root directory (the one carrying the project marker).
    pub site_dir: PathBuf,

    /// Build output directory.
    pub build_dir: PathBuf,

    /// Theme directory, when the theme lives on disk. The embedded default
    /// theme has none.
    pub theme_dir: Option<PathBuf>,

    /// Loaded site spec (empty when the site file is absent).
    pub site: SpecMap,

    /// Loaded theme spec.
    pub theme: SpecMap,
}

impl ProjectContext {
    /// Discover the project from the current directory, searching ancestor
    /// directories for the project marker.
    pub fn discover(cfg: BuildConfig) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let site_dir = find_site_root(&cwd, &cfg)?;
        Self::open(site_dir, None, cfg)
    }

    /// Open a project at a known site root.
    pub fn open(
        site_dir: impl Into<PathBuf>,
        build_dir: Option<PathBuf>,
        cfg: BuildConfig,
    ) -> Result<Self> {
        let site_dir = site_dir.into();
        info!(site = %site_dir.display(), "site root directory");

        let site = load_spec_file(&site_dir.join(&cfg.site_file))?.unwrap_or_default();
        let (theme_dir, theme) = load_theme(&site_dir, &site, &cfg)?;

        let build_dir = build_dir.unwrap_or_else(|| site_dir.join(&cfg.build_dirname));
        info!(build = %build_dir.display(), "build directory");

        Ok(Self {
            cfg,
            site_dir,
            build_dir,
            theme_dir,
            site,
            theme,
        })
    }
}

/// Find the site root: the nearest ancestor of `start` (inclusive) carrying
/// the project marker.
pub fn find_site_root(start: &Path, cfg: &BuildConfig) -> Result<PathBuf> {
    for dir in start.ancestors() {
        if dir.join(&cfg.project_marker).exists() {
            return Ok(dir.to_path_buf());
        }
    }
    Err(CoreError::ProjectNotFound {
        marker: cfg.project_marker.clone(),
    })
}

/// Load a spec file if it exists.
pub fn load_spec_file(path: &Path) -> Result<Option<SpecMap>> {
    if path.is_file() {
        debug!(file = %path.display(), "load spec file");
        Ok(Some(load_spec(&fs::read_to_string(path)?)?))
    } else {
        Ok(None)
    }
}

fn load_theme(
    site_dir: &Path,
    site: &SpecMap,
    cfg: &BuildConfig,
) -> Result<(Option<PathBuf>, SpecMap)> {
    let name = site
        .get("theme")
        .and_then(SpecValue::as_map)
        .and_then(|theme| theme.get("name"))
        .and_then(SpecValue::as_str);

    if let Some(name) = name {
        let dir = site_dir.join(&cfg.themes_dirname).join(name);
        let file = dir.join(&cfg.theme_file);
        if !file.is_file() {
            return Err(CoreError::ThemeNotFound {
                name: name.to_string(),
            });
        }
        debug!(theme = name, file = %file.display(), "load theme");
        let theme = load_spec(&fs::read_to_string(&file)?)?;
        return Ok((Some(dir), theme));
    }

    if let Some(theme) = load_spec_file(&site_dir.join(&cfg.theme_file))? {
        return Ok((Some(site_dir.to_path_buf()), theme));
    }

    warn!("{}: theme not specified, using embedded default", cfg.site_file);
    Ok((None, load_spec(DEFAULT_THEME)?))
}

/// Initialize a quoin project in `dir`: create the project marker and a
/// starter site file.
pub fn init_site(dir: &Path, cfg: &BuildConfig) -> Result<()> {
    let marker = dir.join(&cfg.project_marker);
    if marker.exists() {
        return Err(CoreError::ProjectExists { path: marker });
    }
    info!(dir = %marker.display(), "create project dir");
    fs::create_dir_all(&marker)?;
    let site_file = dir.join(&cfg.site_file);
    if !site_file.exists() {
        fs::write(&site_file, STARTER_SITE_FILE)?;
    }
    Ok(())
}

/// Create a new site directory with enough seeded content for a first
/// build against the embedded default theme.
pub fn new_site(dir: &Path, cfg: &BuildConfig) -> Result<()> {
    if dir.exists() {
        return Err(CoreError::PathAlreadyExists {
            path: dir.to_path_buf(),
        });
    }
    info!(dir = %dir.display(), "create new website");
    fs::create_dir_all(dir)?;
    init_site(dir, cfg)?;

    let home = dir.join(&cfg.content_dirname).join(GROUP_HOME);
    fs::create_dir_all(&home)?;
    fs::write(
        home.join("_main.md"),
        "# Welcome\n\nThis site was built with quoin.\n",
    )?;

    let about = dir.join(&cfg.content_dirname).join(GROUP_PAGES).join("about");
    fs::create_dir_all(&about)?;
    fs::write(about.join("_main.md"), "# About\n\nTell your story here.\n")?;

    Ok(())
}
