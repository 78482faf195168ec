//! Error types for the persistence layer.

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing the data directory.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure while reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A file was present but its JSON could not be parsed.
    #[error("malformed record: {0}")]
    Serde(#[from] serde_json::Error),

    /// The named record does not exist.
    #[error("not found: \"{0}\"")]
    NotFound(String),

    /// The operation would overwrite or remove a built-in base template.
    #[error("\"{0}\" is a built-in base template")]
    BuiltinTemplate(String),
}
