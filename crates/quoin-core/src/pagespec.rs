/*
 * pagespec.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Page spec composition for quoin.
 */

//! Page-spec composition.
//!
//! A page spec is assembled from a merged namespace-of-namespaces: the
//! `pages` category names which sub-spec to use per category, and every
//! category is resolved against its inheritance chain. The composed spec
//! then gets its navigation state: any `navlink` sentinel whose key maps to
//! the current url in the `navlinks` category is flipped to `activenavlink`,
//! and the page url is injected under `vars.url`.

use std::collections::HashSet;

use quoin_spec::{SpecMap, SpecValue, resolve, walk_mut};
use tracing::debug;

use crate::error::{CoreError, Result};

/// Sentinel marking a navigation link in a spec.
pub const NAVLINK: &str = "navlink";
/// Sentinel marking the navigation link of the page being built.
pub const ACTIVE_NAVLINK: &str = "activenavlink";

const PAGES: &str = "pages";
const NAVLINKS: &str = "navlinks";
const VARS: &str = "vars";
const URL_VAR: &str = "url";

/// Overlay spec layers at the top level.
///
/// Later layers win per category: a site spec's `partials` namespace
/// replaces the theme's wholesale. Categories are not deep-merged across
/// layers; overriding happens through spec inheritance instead.
pub fn merge_layers(layers: &[&SpecMap]) -> SpecMap {
    let mut merged = SpecMap::new();
    for layer in layers {
        for (key, value) in layer.iter() {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Compose the fully resolved spec for one page.
///
/// Returns `None` when `specs` has no `pages` category; the caller falls
/// back to raw-file content. The lookup key is the url itself when the
/// `pages` namespace has an entry for it, else `"page"`, else `"default"`.
pub fn page_spec(url: &str, specs: &SpecMap) -> Result<Option<SpecMap>> {
    let Some(pages) = specs.get(PAGES).and_then(SpecValue::as_map) else {
        return Ok(None);
    };

    let name = if pages.contains_key(url) {
        url
    } else if pages.contains_key("page") {
        "page"
    } else {
        "default"
    };
    debug!(url, name, "compose page spec");

    let raw = resolve(name, pages)?;

    let mut spec = SpecMap::new();
    for (category, subname) in raw.iter() {
        let subname = subname
            .as_str()
            .ok_or_else(|| CoreError::InvalidPageEntry {
                category: category.clone(),
            })?;
        let namespace = specs
            .get(category)
            .and_then(SpecValue::as_map)
            .ok_or_else(|| CoreError::CategoryNotFound {
                name: category.clone(),
            })?;
        debug!(category = %category, subname, "resolve sub-spec");
        spec.insert(category.clone(), SpecValue::Map(resolve(subname, namespace)?));
    }

    mark_active_navlinks(&mut spec, url);

    let vars = spec
        .entry(VARS.to_string())
        .or_insert_with(|| SpecValue::Map(SpecMap::new()));
    if let Some(vars) = vars.as_map_mut() {
        vars.insert(URL_VAR.to_string(), SpecValue::scalar(url));
    }

    Ok(Some(spec))
}

/// Flip `navlink` sentinels to `activenavlink` wherever the key maps to the
/// current url in the `navlinks` category. A key with no `navlinks` entry is
/// left unchanged.
fn mark_active_navlinks(spec: &mut SpecMap, url: &str) {
    let active: HashSet<String> = spec
        .get(NAVLINKS)
        .and_then(SpecValue::as_map)
        .map(|nav| {
            nav.iter()
                .filter(|(_, target)| target.as_str() == Some(url))
                .map(|(key, _)| key.clone())
                .collect()
        })
        .unwrap_or_default();
    if active.is_empty() {
        return;
    }

    walk_mut(spec, &mut |key, value| {
        if value.as_str() == Some(NAVLINK) && active.contains(key) {
            debug!(key, "flip navlink to activenavlink");
            *value = SpecValue::scalar(ACTIVE_NAVLINK);
        }
    });
}
