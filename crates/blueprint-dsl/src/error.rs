//! Error types for blueprint-dsl

use thiserror::Error;

/// Result type alias for blueprint-dsl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in blueprint-dsl
#[derive(Error, Debug)]
pub enum Error {
    /// Blueprint file could not be found
    #[error("blueprint file not found: {path}")]
    FileNotFound {
        /// Path that was searched
        path: String,
    },

    /// Blueprint file has an extension the loader does not recognize
    #[error("unsupported blueprint format '{extension}' (expected json, yaml, or yml)")]
    UnsupportedFormat {
        /// Extension that was encountered
        extension: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
