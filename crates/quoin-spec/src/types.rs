//! Core value types for the spec model.

use indexmap::IndexMap;

/// Field naming the spec a node inherits from.
///
/// Present on any node that participates in inheritance; a null value (or an
/// absent key) terminates the chain. Resolution strips the key from its
/// output.
pub const INHERIT_KEY: &str = "inherit";

/// An ordered mapping from field name to [`SpecValue`].
///
/// Insertion order is semantically significant: the `layouts` namespace in
/// particular uses it to fix the document order of composed fragments.
pub type SpecMap = IndexMap<String, SpecValue>;

/// A value in a spec tree.
///
/// The spec value domain is deliberately small: scalar strings, null, and
/// nested mappings. Non-string YAML scalars are normalized to their string
/// spelling at load time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpecValue {
    /// An absent/placeholder value. In a layout this means "the child's
    /// partial name equals its key"; in a content schema it means "must come
    /// from source".
    #[default]
    Null,

    /// A scalar string field.
    Scalar(String),

    /// A nested spec mapping.
    Map(SpecMap),
}

impl SpecValue {
    /// Create a scalar value.
    pub fn scalar(s: impl Into<String>) -> Self {
        SpecValue::Scalar(s.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, SpecValue::Null)
    }

    /// Check if this value is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, SpecValue::Scalar(_))
    }

    /// Check if this value is a mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, SpecValue::Map(_))
    }

    /// Get the scalar string if this is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SpecValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Get the mapping if this is a mapping.
    pub fn as_map(&self) -> Option<&SpecMap> {
        match self {
            SpecValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get the mapping mutably if this is a mapping.
    pub fn as_map_mut(&mut self) -> Option<&mut SpecMap> {
        match self {
            SpecValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Consume and return the mapping if this is a mapping.
    pub fn into_map(self) -> Option<SpecMap> {
        match self {
            SpecValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// "Truthiness" in the sense the spec language uses it: null, the empty
    /// string, and the empty mapping are all falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            SpecValue::Null => false,
            SpecValue::Scalar(s) => !s.is_empty(),
            SpecValue::Map(m) => !m.is_empty(),
        }
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        SpecValue::Scalar(s.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(s: String) -> Self {
        SpecValue::Scalar(s)
    }
}

impl From<SpecMap> for SpecValue {
    fn from(m: SpecMap) -> Self {
        SpecValue::Map(m)
    }
}
