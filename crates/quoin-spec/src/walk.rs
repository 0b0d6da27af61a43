//! Pre-order traversal of spec trees.

use crate::types::{SpecMap, SpecValue};

/// Walk every key/value pair of `map` in pre-order, passing a `/`-joined
/// path, the local key, and the value.
///
/// A key that already starts with `/` (page urls are common keys) restarts
/// the path at that key rather than nesting under its parent.
pub fn walk<F>(map: &SpecMap, mut visit: F)
where
    F: FnMut(&str, &str, &SpecValue),
{
    walk_inner(map, "", &mut visit);
}

fn walk_inner<F>(map: &SpecMap, prefix: &str, visit: &mut F)
where
    F: FnMut(&str, &str, &SpecValue),
{
    for (key, value) in map.iter() {
        let path = join_path(prefix, key);
        visit(&path, key, value);
        if let SpecValue::Map(child) = value {
            walk_inner(child, &path, visit);
        }
    }
}

/// Walk every key/value pair of `map` in pre-order, allowing the visitor to
/// rewrite values in place. Children are descended after the visitor runs,
/// against the possibly-rewritten value.
pub fn walk_mut<F>(map: &mut SpecMap, visit: &mut F)
where
    F: FnMut(&str, &mut SpecValue),
{
    for (key, value) in map.iter_mut() {
        visit(key, value);
        if let SpecValue::Map(child) = value {
            walk_mut(child, visit);
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() || key.starts_with('/') {
        key.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{key}")
    } else {
        format!("{prefix}/{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::load_spec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_walk_order_and_paths() {
        let spec = load_spec(concat!(
            "/:\n",
            "  blog:\n",
            "    /first-post: null\n",
            "  contact: null\n",
            "  about:\n",
            "    tmp.html: null\n",
        ))
        .unwrap();

        let mut paths = Vec::new();
        walk(&spec, |path, _key, _value| paths.push(path.to_string()));
        assert_eq!(
            paths,
            vec!["/", "/blog", "/first-post", "/contact", "/about", "/about/tmp.html"]
        );
    }

    #[test]
    fn test_walk_mut_rewrites_in_place() {
        let mut spec = load_spec("nav:\n  home: navlink\n  about: navlink\n").unwrap();
        walk_mut(&mut spec, &mut |key, value| {
            if key == "home" && value.as_str() == Some("navlink") {
                *value = SpecValue::scalar("activenavlink");
            }
        });
        let nav = spec.get("nav").and_then(SpecValue::as_map).unwrap();
        assert_eq!(nav.get("home").unwrap().as_str(), Some("activenavlink"));
        assert_eq!(nav.get("about").unwrap().as_str(), Some("navlink"));
    }
}
