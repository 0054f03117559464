//! Analyzer configuration
//!
//! Holds the thresholds that gate verdicts and suggestions. Defaults are the
//! documented behavior; a TOML file may override any subset of them.
//!
//! ```toml
//! ai_confidence_threshold = 70.0
//! quality_floor = 45.0
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds used by the phases
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Phase 3: likely AI-generated when confidence is strictly above this
    pub ai_confidence_threshold: f64,
    /// Phase 4: a quality dimension strictly below this yields a suggestion
    pub quality_floor: f64,
    /// Phase 7: Documentation debt when completeness is below this
    pub documentation_debt_floor: f64,
    /// Phase 7: Design debt when justification is below this
    pub design_debt_floor: f64,
    /// Phase 7: Code debt when traceability is below this
    pub code_debt_floor: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ai_confidence_threshold: 60.0,
            quality_floor: 50.0,
            documentation_debt_floor: 50.0,
            design_debt_floor: 50.0,
            code_debt_floor: 40.0,
        }
    }
}

impl AnalyzerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With AI confidence threshold
    #[inline]
    #[must_use]
    pub fn with_ai_confidence_threshold(mut self, threshold: f64) -> Self {
        self.ai_confidence_threshold = threshold;
        self
    }

    /// With quality floor
    #[inline]
    #[must_use]
    pub fn with_quality_floor(mut self, floor: f64) -> Self {
        self.quality_floor = floor;
        self
    }

    /// With Documentation debt floor
    #[inline]
    #[must_use]
    pub fn with_documentation_debt_floor(mut self, floor: f64) -> Self {
        self.documentation_debt_floor = floor;
        self
    }

    /// With Design debt floor
    #[inline]
    #[must_use]
    pub fn with_design_debt_floor(mut self, floor: f64) -> Self {
        self.design_debt_floor = floor;
        self
    }

    /// With Code debt floor
    #[inline]
    #[must_use]
    pub fn with_code_debt_floor(mut self, floor: f64) -> Self {
        self.code_debt_floor = floor;
        self
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys,
    /// [`ConfigError::OutOfRange`] for thresholds outside [0, 100].
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`AnalyzerConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded analyzer config");
        Ok(config)
    }

    /// Check every threshold lies within [0, 100]
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("ai_confidence_threshold", self.ai_confidence_threshold),
            ("quality_floor", self.quality_floor),
            ("documentation_debt_floor", self.documentation_debt_floor),
            ("design_debt_floor", self.design_debt_floor),
            ("code_debt_floor", self.code_debt_floor),
        ];
        for (field, value) in fields {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}
