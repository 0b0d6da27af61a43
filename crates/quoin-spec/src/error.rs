//! Error types for spec loading and resolution.

use thiserror::Error;

/// Errors that can occur while loading or resolving specs.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The named spec does not exist in its namespace.
    #[error("Spec not found: {name}")]
    NotFound { name: String },

    /// An `inherit` field references a name absent from the namespace.
    #[error("Not found: inherited: {name}")]
    AncestorNotFound { name: String },

    /// Following `inherit` fields revisited a name.
    #[error("Inheritance cycle detected at: {name}")]
    InheritanceCycle { name: String },

    /// A spec participating in resolution is not a mapping.
    #[error("Not a mapping: {name}")]
    NotAMapping { name: String },

    /// An `inherit` field holds something other than a name or null.
    #[error("Invalid inherit value in spec: {name}")]
    InvalidInherit { name: String },

    /// The YAML document could not be scanned.
    #[error("YAML error: {0}")]
    Yaml(#[from] yaml_rust2::ScanError),

    /// The top-level YAML document is not a mapping.
    #[error("Top-level spec document is not a mapping")]
    DocumentNotAMapping,
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
