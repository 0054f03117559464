//! Stored analysis records

use adr_analysis::AnalysisReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use uuid::Uuid;

/// Identifier of a stored analysis: `analysis_` plus 8 hex digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisId(String);

impl AnalysisId {
    /// Fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(format!("analysis_{}", &simple[..8]))
    }

    /// Identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnalysisId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Format the analyzed text arrived in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Plain text
    Text,
    /// Markdown
    Markdown,
    /// PDF, extracted upstream
    Pdf,
}

impl DocumentType {
    /// Guess from a file extension; unknown extensions are plain text
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("md" | "markdown") => Self::Markdown,
            Some("pdf") => Self::Pdf,
            _ => Self::Text,
        }
    }

    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Pdf => "pdf",
        }
    }
}

/// Where a report came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Source format
    pub document_type: DocumentType,
    /// Uploaded file name, if any
    pub file_name: Option<String>,
}

impl Provenance {
    /// Pasted text with no file
    #[must_use]
    pub fn text() -> Self {
        Self {
            document_type: DocumentType::Text,
            file_name: None,
        }
    }

    /// From a file path
    #[must_use]
    pub fn file(path: &Path) -> Self {
        Self {
            document_type: DocumentType::from_path(path),
            file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()),
        }
    }
}

/// A persisted report with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    /// Identifier
    pub id: AnalysisId,
    /// When the report was saved
    pub created_at: DateTime<Utc>,
    /// Origin of the analyzed text
    #[serde(flatten)]
    pub provenance: Provenance,
    /// The report, carrying the same `id`
    pub report: AnalysisReport,
}

impl StoredAnalysis {
    /// Listing row for this record
    #[must_use]
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            id: self.id.clone(),
            created_at: self.created_at,
            file_name: self.provenance.file_name.clone(),
            document_type: self.provenance.document_type,
            overall_quality_score: self.report.overall_quality_score,
            overall_maturity_score: self.report.overall_maturity_score,
            compliance_percentage: self.report.compliance_percentage,
        }
    }
}

/// One row of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Identifier
    pub id: AnalysisId,
    /// When the report was saved
    pub created_at: DateTime<Utc>,
    /// Uploaded file name, if any
    pub file_name: Option<String>,
    /// Source format
    pub document_type: DocumentType,
    /// Phase 2 overall
    pub overall_quality_score: f64,
    /// Phase 8 overall
    pub overall_maturity_score: f64,
    /// Phase 9 percentage
    pub compliance_percentage: f64,
}

/// A page of summaries, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPage {
    /// Records in the store
    pub total: usize,
    /// Requested window
    pub analyses: Vec<AnalysisSummary>,
}
