//! In-process store

use crate::error::StoreError;
use crate::record::{AnalysisId, AnalysisPage, Provenance, StoredAnalysis};
use crate::ReportStore;
use adr_analysis::AnalysisReport;
use chrono::Utc;
use indexmap::IndexMap;
use parking_lot::RwLock;

/// Report store kept in memory, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<IndexMap<AnalysisId, StoredAnalysis>>,
}

impl InMemoryStore {
    /// Empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl ReportStore for InMemoryStore {
    fn save(&self, report: AnalysisReport, provenance: Provenance) -> StoredAnalysis {
        let mut records = self.records.write();
        let mut id = AnalysisId::generate();
        while records.contains_key(&id) {
            id = AnalysisId::generate();
        }
        let stored = StoredAnalysis {
            report: report.with_id(id.as_str()),
            id: id.clone(),
            created_at: Utc::now(),
            provenance,
        };
        records.insert(id, stored.clone());
        tracing::debug!(id = %stored.id, total = records.len(), "saved analysis");
        stored
    }

    fn get(&self, id: &AnalysisId) -> Result<StoredAnalysis, StoreError> {
        self.records
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self, skip: usize, limit: usize) -> AnalysisPage {
        let records = self.records.read();
        AnalysisPage {
            total: records.len(),
            analyses: records
                .values()
                .rev()
                .skip(skip)
                .take(limit)
                .map(StoredAnalysis::summary)
                .collect(),
        }
    }

    fn delete(&self, id: &AnalysisId) -> Result<(), StoreError> {
        // shift_remove keeps listing order stable
        match self.records.write().shift_remove(id) {
            Some(_) => {
                tracing::debug!(%id, "deleted analysis");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
