//! Error types for the Extractor

use thiserror::Error;

/// Message carried by [`ExtractorError::Extraction`] when no rows survive
pub const NO_INGREDIENTS: &str = "ingredient list could not be parsed";

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// The report contained no text at all
    #[error("Empty response: no report text received")]
    EmptyResponse,

    /// Text was received but no ingredient rows could be recovered
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// The rejection raised when the ingredient table yields nothing
    pub fn no_ingredients() -> Self {
        ExtractorError::Extraction(NO_INGREDIENTS.to_string())
    }
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Config(format!("Failed to parse TOML: {}", e))
    }
}

impl From<std::io::Error> for ExtractorError {
    fn from(e: std::io::Error) -> Self {
        ExtractorError::Config(format!("Failed to read config file: {}", e))
    }
}
