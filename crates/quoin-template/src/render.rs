/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Two-pass content rendering.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::TemplateResult;
use crate::subst::substitute;

/// Merged page content: an ordered mapping from content key to markup
/// fragment. Built per page and consumed immediately.
pub type Content = IndexMap<String, String>;

/// Substitute `content` into `template`.
///
/// Runs exactly two substitution passes: the first fills every `{key}`
/// token in the template, the second resolves tokens introduced by content
/// values themselves (a content string referencing a variable, say). No
/// further passes run; tokens introduced by the second pass are left as-is.
///
/// # Errors
///
/// [`crate::TemplateError::PlaceholderNotFound`] when either pass meets a
/// token with no content entry, naming the missing key.
pub fn render(template: &str, content: &Content) -> TemplateResult<String> {
    debug!("render template with merged content");
    let lookup = |key: &str| content.get(key).cloned();
    let first = substitute(template, lookup)?;
    substitute(&first, lookup)
}
