//! Conversion from YAML to the spec value model.
//!
//! yaml-rust2 hashes preserve insertion order, which the spec model depends
//! on (layout composition order follows mapping order).

use yaml_rust2::{Yaml, YamlLoader};

use crate::error::{SpecError, SpecResult};
use crate::types::{SpecMap, SpecValue};

/// Convert a parsed YAML node to a [`SpecValue`].
///
/// Scalars are normalized to their string spelling; null and YAML's
/// bad-value marker become [`SpecValue::Null`]. Arrays have no meaning in
/// the spec model and also convert to null. Mapping entries with non-string
/// keys are skipped.
pub fn spec_value_from_yaml(yaml: &Yaml) -> SpecValue {
    match yaml {
        Yaml::Null | Yaml::BadValue => SpecValue::Null,
        Yaml::String(s) => SpecValue::Scalar(s.clone()),
        Yaml::Boolean(b) => SpecValue::Scalar(b.to_string()),
        Yaml::Integer(i) => SpecValue::Scalar(i.to_string()),
        Yaml::Real(s) => SpecValue::Scalar(s.clone()),
        Yaml::Hash(hash) => {
            let mut map = SpecMap::new();
            for (key, value) in hash {
                if let Some(key) = key.as_str() {
                    map.insert(key.to_string(), spec_value_from_yaml(value));
                }
            }
            SpecValue::Map(map)
        }
        Yaml::Array(_) | Yaml::Alias(_) => SpecValue::Null,
    }
}

/// Load a spec document from YAML text.
///
/// An empty document yields an empty mapping; a document whose root is not a
/// mapping is an error.
pub fn load_spec(text: &str) -> SpecResult<SpecMap> {
    let docs = YamlLoader::load_from_str(text)?;
    let Some(doc) = docs.first() else {
        return Ok(SpecMap::new());
    };
    match spec_value_from_yaml(doc) {
        SpecValue::Map(map) => Ok(map),
        SpecValue::Null => Ok(SpecMap::new()),
        _ => Err(SpecError::DocumentNotAMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_preserves_order() {
        let spec = load_spec("b: 1\na: 2\nc: 3\n").unwrap();
        let keys: Vec<_> = spec.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_scalars_normalized_to_strings() {
        let spec = load_spec("count: 5\nenabled: true\nratio: 0.5\n").unwrap();
        assert_eq!(spec.get("count").unwrap().as_str(), Some("5"));
        assert_eq!(spec.get("enabled").unwrap().as_str(), Some("true"));
        assert_eq!(spec.get("ratio").unwrap().as_str(), Some("0.5"));
    }

    #[test]
    fn test_null_values() {
        let spec = load_spec("title: null\nbody:\n").unwrap();
        assert!(spec.get("title").unwrap().is_null());
        assert!(spec.get("body").unwrap().is_null());
    }

    #[test]
    fn test_nested_mapping() {
        let spec = load_spec("layouts:\n  doc:\n    header: null\n    body: main\n").unwrap();
        let doc = spec
            .get("layouts")
            .and_then(SpecValue::as_map)
            .and_then(|layouts| layouts.get("doc"))
            .and_then(SpecValue::as_map)
            .unwrap();
        assert!(doc.get("header").unwrap().is_null());
        assert_eq!(doc.get("body").unwrap().as_str(), Some("main"));
    }

    #[test]
    fn test_empty_document() {
        assert!(load_spec("").unwrap().is_empty());
        assert!(load_spec("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_non_mapping_document_rejected() {
        // Arrays have no spec meaning and collapse to an empty document.
        assert!(load_spec("- a\n- b\n").unwrap().is_empty());
        assert!(matches!(
            load_spec("just a string"),
            Err(SpecError::DocumentNotAMapping)
        ));
    }
}
