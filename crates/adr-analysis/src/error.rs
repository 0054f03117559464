//! Error types for the analysis pipeline
//!
//! Normalization is the only step that can fail. Once a [`Document`] exists
//! every phase returns a definite value.
//!
//! [`Document`]: adr_document::Document

use adr_document::DocumentError;
use std::path::PathBuf;

/// Analysis failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Input could not be normalized
    #[error("invalid document: {0}")]
    Document(#[from] DocumentError),
}

impl AnalysisError {
    /// Analysis is deterministic; retrying the same input fails the same way
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Whether the input was empty
    #[inline]
    #[must_use]
    pub fn is_empty_document(&self) -> bool {
        matches!(self, Self::Document(DocumentError::Empty))
    }
}

/// Configuration loading or validation failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid TOML for [`AnalyzerConfig`](crate::AnalyzerConfig)
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A threshold lies outside [0, 100]
    #[error("{field} must be within [0, 100], got {value}")]
    OutOfRange {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: f64,
    },
}
