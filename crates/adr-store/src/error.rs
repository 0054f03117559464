//! Store errors

/// Persistence failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No analysis with this identifier
    #[error("analysis not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Whether the error is a missing record
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
