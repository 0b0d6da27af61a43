//! Error types for quoin-core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not a website project (or any parent directories): {marker} not found")]
    ProjectNotFound { marker: String },

    #[error("Website project already exists: {}", path.display())]
    ProjectExists { path: PathBuf },

    #[error("Already exists: {}", path.display())]
    PathAlreadyExists { path: PathBuf },

    #[error("Theme not found: {name}")]
    ThemeNotFound { name: String },

    #[error("Source dir not found: {}", path.display())]
    SourceDirNotFound { path: PathBuf },

    #[error("No page spec and no index page in: {}", path.display())]
    NoPageSource { path: PathBuf },

    #[error("Spec category not found: {name}")]
    CategoryNotFound { name: String },

    #[error("Invalid page spec entry: {category}")]
    InvalidPageEntry { category: String },

    #[error("Invalid content group: {name}")]
    InvalidContentGroup { name: String },

    #[error("Invalid file type: {}", path.display())]
    ContentFile { path: PathBuf },

    #[error("Missing content: {}", keys.join(", "))]
    MissingContent { keys: Vec<String> },

    #[error("Unused content: {}", keys.join(", "))]
    UnusedContent { keys: Vec<String> },

    #[error("Missing vars: {}", names.join(", "))]
    MissingVars { names: Vec<String> },

    #[error("Remove: {}: path not allowed, protecting: {}", path.display(), protected.display())]
    PathNotAllowed { path: PathBuf, protected: PathBuf },

    #[error("Remove: {}: basename not allowed: {basename}", path.display())]
    BasenameNotAllowed { path: PathBuf, basename: String },

    #[error("Remove: path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error(transparent)]
    Spec(#[from] quoin_spec::SpecError),

    #[error(transparent)]
    Template(#[from] quoin_template::TemplateError),

    #[error(transparent)]
    Sass(#[from] quoin_sass::SassError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
