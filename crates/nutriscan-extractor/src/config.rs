//! Configuration for the report parser

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder quantity for rows that leave it blank
pub const DEFAULT_QUANTITY: &str = "N/A";

/// Placeholder description for rows without a reason column
pub const DEFAULT_DESCRIPTION: &str = "No additional details provided.";

/// Placeholder summary for reports without a SUMMARY section
pub const DEFAULT_SUMMARY: &str = "No summary available.";

/// Neutral score used when HEALTH_SCORE is missing or unreadable
pub const DEFAULT_HEALTH_SCORE: u8 = 50;

/// Fewest pipe-separated fields a table row needs (name, quantity, status)
pub const MIN_ROW_FIELDS: usize = 3;

/// Configuration for the report parser
///
/// Every default the parser substitutes for a missing field lives here, so
/// the fallback behaviour can be audited and tuned without touching the
/// extraction passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Rows with fewer fields than this are discarded
    pub min_row_fields: usize,

    /// Quantity used when a row leaves it blank
    pub default_quantity: String,

    /// Description used when a row has no reason column
    pub default_description: String,

    /// Summary used when the report has none
    pub default_summary: String,

    /// Score used when HEALTH_SCORE is missing or not a number in range
    pub default_health_score: u8,
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_row_fields < MIN_ROW_FIELDS {
            return Err(format!(
                "min_row_fields must be at least {} (name, quantity, status)",
                MIN_ROW_FIELDS
            ));
        }
        if self.default_health_score > 100 {
            return Err("default_health_score must be within 0..=100".to_string());
        }
        if self.default_quantity.trim().is_empty() {
            return Err("default_quantity must not be empty".to_string());
        }
        if self.default_description.trim().is_empty() {
            return Err("default_description must not be empty".to_string());
        }
        if self.default_summary.trim().is_empty() {
            return Err("default_summary must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    ///
    /// Keys left out of the document keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_row_fields: MIN_ROW_FIELDS,
            default_quantity: DEFAULT_QUANTITY.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
            default_summary: DEFAULT_SUMMARY.to_string(),
            default_health_score: DEFAULT_HEALTH_SCORE,
        }
    }
}
