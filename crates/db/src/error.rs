use locmap_core::error::CoreError;

/// Errors from the record store and repositories.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error (validation, not found, unauthorized, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing a collection on disk failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection could not be decoded or encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
