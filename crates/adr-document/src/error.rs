//! Error types for document normalization

/// Normalization failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Input is empty, whitespace, or markup characters only
    #[error("document has no analyzable content")]
    Empty,
}

impl DocumentError {
    /// Normalization never succeeds on retry with the same input
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
