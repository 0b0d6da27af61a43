/*
 * compose.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Layout-tree composition.
//!
//! A page spec's `layouts` namespace describes a tree: each layout maps
//! child names to an optional partial-name override, and a child that is
//! itself a non-empty layout nests recursively. Composition expands the tree
//! rooted at `doc` into one template string whose leaves are deferred
//! `{key}` content placeholders.

use quoin_spec::{SpecMap, SpecValue};
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::subst::substitute;

/// Name of the root layout every composed document starts from.
pub const ROOT_LAYOUT: &str = "doc";

const LAYOUTS: &str = "layouts";
const PARTIALS: &str = "partials";
const DESCRIPTIONS: &str = "descriptions";

/// Compose the full template for a resolved page spec.
///
/// Joins the partials of the root `doc` layout with newlines; a spec with no
/// `doc` layout composes to a bare newline.
pub fn compose_template(spec: &SpecMap) -> TemplateResult<String> {
    debug!("compose template from page spec");
    let parts = compose_partials(spec, ROOT_LAYOUT)?;
    Ok(parts.join("\n") + "\n")
}

/// Expand one layout into its ordered partial strings.
///
/// Children are visited in the layout's insertion order. For each child:
/// the partial format string is taken from the `partials` namespace (under
/// the override name when the layout gives one, else the child's own name),
/// and its `{partial}` slot receives either the recursively composed child
/// layout or the deferred `{child}` placeholder.
pub fn compose_partials(spec: &SpecMap, name: &str) -> TemplateResult<Vec<String>> {
    let layouts = category(spec, LAYOUTS);
    let Some(layout) = layouts
        .and_then(|l| l.get(name))
        .and_then(SpecValue::as_map)
        .filter(|m| !m.is_empty())
    else {
        return Ok(Vec::new());
    };

    let mut parts = Vec::with_capacity(layout.len());
    for (child_name, override_value) in layout.iter() {
        let partial_name = override_value.as_str().unwrap_or(child_name);
        let fmt = category(spec, PARTIALS)
            .and_then(|p| p.get(partial_name))
            .and_then(SpecValue::as_str)
            .ok_or_else(|| TemplateError::PartialNotFound {
                name: partial_name.to_string(),
            })?;

        let is_nested = layouts
            .and_then(|l| l.get(child_name))
            .and_then(SpecValue::as_map)
            .is_some_and(|m| !m.is_empty());
        let child = if is_nested {
            format!("\n{}\n", compose_partials(spec, child_name)?.join("\n"))
        } else {
            format!("{{{child_name}}}")
        };

        let desc = description(spec, child_name);
        let partial = substitute(fmt, |key| match key {
            "partialname" => Some(child_name.clone()),
            "partialdescription" => Some(desc.clone()),
            "partial" => Some(child.clone()),
            _ => None,
        })?;
        parts.push(partial);
    }
    Ok(parts)
}

/// Human-readable description of a layout child, from the optional
/// `descriptions` namespace; defaults to the child's own name.
fn description(spec: &SpecMap, name: &str) -> String {
    category(spec, DESCRIPTIONS)
        .and_then(|d| d.get(name))
        .and_then(SpecValue::as_str)
        .unwrap_or(name)
        .to_string()
}

fn category<'a>(spec: &'a SpecMap, name: &str) -> Option<&'a SpecMap> {
    spec.get(name).and_then(SpecValue::as_map)
}
