//! Inheritance resolution.
//!
//! A spec node may name another node in the same namespace via its `inherit`
//! field. Resolution flattens the whole chain into a single mapping:
//! ancestors are overlaid from oldest to newest, so the resolved node always
//! overrides its ancestors and nearer ancestors override farther ones.

use std::collections::HashSet;

use tracing::trace;

use crate::error::{SpecError, SpecResult};
use crate::types::{INHERIT_KEY, SpecMap, SpecValue};

/// Resolve the named spec against its inheritance chain.
///
/// Returns a fully owned mapping with no `inherit` key; callers may mutate
/// the result freely without aliasing the namespace.
///
/// A field whose value is a mapping carrying its own `inherit` key is merged
/// field-by-field into the accumulated mapping at that key (and the nested
/// `inherit` dropped); every other field replaces wholesale. A node with no
/// `inherit` key is treated as `inherit: null`.
///
/// # Errors
///
/// - [`SpecError::NotFound`] when `name` is absent from `namespace`
/// - [`SpecError::AncestorNotFound`] when an `inherit` field names a spec
///   that does not exist
/// - [`SpecError::InheritanceCycle`] when the chain revisits a name
pub fn resolve(name: &str, namespace: &SpecMap) -> SpecResult<SpecMap> {
    let chain = ancestor_chain(name, namespace)?;
    trace!(name, depth = chain.len(), "resolve inheritance chain");

    // Chain is [self, parent, grandparent, ...]; start from a copy of the
    // oldest ancestor and overlay forward, ending with self.
    let mut resolved = chain.last().map(|node| (*node).clone()).unwrap_or_default();
    for ancestor in chain.iter().rev() {
        for (key, value) in ancestor.iter() {
            match value {
                SpecValue::Map(nested) if nested.contains_key(INHERIT_KEY) => {
                    let slot = resolved
                        .entry(key.clone())
                        .or_insert_with(|| SpecValue::Map(SpecMap::new()));
                    if !slot.is_map() {
                        *slot = SpecValue::Map(SpecMap::new());
                    }
                    let target = slot.as_map_mut().expect("slot ensured to be a mapping");
                    for (nested_key, nested_value) in nested.iter() {
                        target.insert(nested_key.clone(), nested_value.clone());
                    }
                    target.shift_remove(INHERIT_KEY);
                }
                _ => {
                    resolved.insert(key.clone(), value.clone());
                }
            }
        }
    }

    // shift_remove keeps the relative order of the remaining fields.
    resolved.shift_remove(INHERIT_KEY);
    Ok(resolved)
}

/// Collect the ancestor chain `[self, parent, grandparent, ...]`.
///
/// The chain ends at a node whose `inherit` is null, empty, or absent. An
/// empty ancestor mapping also terminates the chain and is not included.
fn ancestor_chain<'a>(name: &str, namespace: &'a SpecMap) -> SpecResult<Vec<&'a SpecMap>> {
    let node = namespace.get(name).ok_or_else(|| SpecError::NotFound {
        name: name.to_string(),
    })?;
    let node = node.as_map().ok_or_else(|| SpecError::NotAMapping {
        name: name.to_string(),
    })?;

    let mut chain = vec![node];
    let mut visited: HashSet<&str> = HashSet::from([name]);
    let mut current = node;
    loop {
        let inherited = match current.get(INHERIT_KEY) {
            None | Some(SpecValue::Null) => break,
            Some(SpecValue::Scalar(target)) if target.is_empty() => break,
            Some(SpecValue::Scalar(target)) => target.as_str(),
            Some(SpecValue::Map(_)) => {
                return Err(SpecError::InvalidInherit {
                    name: name.to_string(),
                });
            }
        };
        if !visited.insert(inherited) {
            return Err(SpecError::InheritanceCycle {
                name: inherited.to_string(),
            });
        }
        let ancestor = namespace
            .get(inherited)
            .ok_or_else(|| SpecError::AncestorNotFound {
                name: inherited.to_string(),
            })?;
        let ancestor = ancestor.as_map().ok_or_else(|| SpecError::NotAMapping {
            name: inherited.to_string(),
        })?;
        if ancestor.is_empty() {
            break;
        }
        chain.push(ancestor);
        current = ancestor;
    }
    Ok(chain)
}
