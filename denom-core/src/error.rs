//! Error types for denom-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::Kind;

/// Rejections raised while validating a manifest document against the
/// schema. Every variant names the offending key so the CLI can render a
/// precise message.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The dot-path key does not appear in the schema.
    #[error("invalid key '{key}' in manifest")]
    UnknownKey { key: String },

    /// The key is recognized but the value's runtime type disagrees with
    /// the registered kind.
    #[error("expected '{expected}' value for key '{key}' but got '{actual}' value")]
    TypeMismatch {
        key: String,
        expected: Kind,
        actual: String,
    },

    /// A value shape the store cannot represent at this key (nested
    /// arrays, objects inside non-script arrays, nulls).
    #[error("unsupported value type '{actual}' found for key '{key}'")]
    UnsupportedType { key: String, actual: String },

    /// A script entry is missing `name` or `path` (or carries an empty one).
    #[error("missing '{field}' property in script entry at key '{key}'")]
    MissingRequiredField { field: &'static str, key: String },

    /// Two script entries in one document share a name.
    #[error("duplicate script name '{name}' at key 'scripts'")]
    DuplicateScriptName { name: String },
}

/// All errors that can arise from manifest file persistence.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Underlying I/O failure (permission denied, disk full, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (write/save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parse error on load — includes file path and position context
    /// from serde_json.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The parsed document failed schema validation.
    #[error("invalid manifest at {path}: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// The manifest file did not exist at the expected path.
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },
}
