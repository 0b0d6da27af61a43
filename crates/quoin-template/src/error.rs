/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template composition and rendering.

use thiserror::Error;

/// Errors that can occur during template operations.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A layout child references a partial absent from the `partials`
    /// namespace.
    #[error("Partial not found: {name}")]
    PartialNotFound { name: String },

    /// A `{key}` token has no corresponding binding.
    #[error("Missing content: {name}")]
    PlaceholderNotFound { name: String },

    /// The placeholder syntax itself is malformed (stray or unterminated
    /// brace, empty or nested field).
    #[error("Bad placeholder: {message}")]
    BadPlaceholder { message: String },
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
