#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The input as a whole cannot be processed (empty file, wrong header
    /// shape, non-array JSON). Raised before any row is looked at.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
