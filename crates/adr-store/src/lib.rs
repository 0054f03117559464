//! ADR Store - persistence for analysis reports
//!
//! Reports are saved with a generated `analysis_<8 hex>` identifier, a
//! creation timestamp and the provenance of the analyzed text. Listings are
//! newest first and paginated with `skip`/`limit`.
//!
//! # Example
//!
//! ```rust
//! use adr_store::{InMemoryStore, Provenance, ReportStore};
//!
//! let store = InMemoryStore::new();
//! let report = adr_analysis::analyze("# ADR-1: Use Postgres\n## Status\nAccepted").unwrap();
//! let saved = store.save(report, Provenance::text());
//! assert_eq!(store.get(&saved.id).unwrap().report.id.as_deref(), Some(saved.id.as_str()));
//! assert_eq!(store.list(0, 10).total, 1);
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod memory;
pub mod record;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use record::{
    AnalysisId, AnalysisPage, AnalysisSummary, DocumentType, Provenance, StoredAnalysis,
};

use adr_analysis::AnalysisReport;

/// Persistence collaborator for finished reports
///
/// Implementations must be safe to share between threads; analyses may be
/// saved from a parallel batch.
pub trait ReportStore: Send + Sync {
    /// Persist `report` under a fresh identifier, which is also written into
    /// the stored report's `id`
    fn save(&self, report: AnalysisReport, provenance: Provenance) -> StoredAnalysis;

    /// Fetch one record
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no record has this identifier.
    fn get(&self, id: &AnalysisId) -> Result<StoredAnalysis, StoreError>;

    /// Summaries, newest first, after skipping `skip` and returning at most
    /// `limit`
    fn list(&self, skip: usize, limit: usize) -> AnalysisPage;

    /// Remove one record
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no record has this identifier.
    fn delete(&self, id: &AnalysisId) -> Result<(), StoreError>;
}
