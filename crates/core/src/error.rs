/// Result alias that carries the custom [`OrreryError`] type.
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum OrreryError {
    /// A hand observation did not carry the fixed 21-point landmark schema.
    /// The detector guarantees the count, so downstream code refuses to
    /// truncate or pad a frame that breaks the guarantee.
    #[error("invalid landmark frame: expected {expected} points, got {actual}")]
    InvalidLandmarkCount { expected: usize, actual: usize },
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
