//! Parse a generated report into an analysis

use crate::citations::map_citations;
use crate::config::ParserConfig;
use crate::error::ExtractorError;
use crate::fields::{extract_fssai_notice, extract_health_score, extract_product, extract_summary};
use crate::table::extract_ingredients;
use nutriscan_domain::{AnalysisResult, RawCitation};
use tracing::{debug, info, warn};

/// Turns report text into an [`AnalysisResult`]
///
/// The parser holds nothing but its configuration; `parse` is a pure function
/// of its arguments and may be called from many threads at once.
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    config: ParserConfig,
}

impl ReportParser {
    /// Create a parser with a validated configuration
    pub fn new(config: ParserConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one report
    ///
    /// `query` is the product the user asked about; it stands in for the
    /// product name when the report has none.
    ///
    /// # Errors
    ///
    /// - [`ExtractorError::EmptyResponse`] when `text` is blank
    /// - [`ExtractorError::Extraction`] when no ingredient row survives, even
    ///   if every other field was found
    pub fn parse(
        &self,
        text: &str,
        citations: &[RawCitation],
        query: &str,
    ) -> Result<AnalysisResult, ExtractorError> {
        if text.trim().is_empty() {
            warn!("Report text is empty");
            return Err(ExtractorError::EmptyResponse);
        }

        let ingredients = extract_ingredients(text, &self.config);
        if ingredients.is_empty() {
            warn!(len = text.len(), "No ingredient rows recovered, rejecting report");
            return Err(ExtractorError::no_ingredients());
        }

        let product_name = extract_product(text).unwrap_or_else(|| {
            debug!("PRODUCT missing, falling back to query");
            query.trim().to_string()
        });

        let health_score = extract_health_score(text).unwrap_or_else(|| {
            debug!(
                default = self.config.default_health_score,
                "HEALTH_SCORE missing or unreadable"
            );
            self.config.default_health_score
        });

        let summary = extract_summary(text).unwrap_or_else(|| {
            debug!("SUMMARY missing");
            self.config.default_summary.clone()
        });

        let fssai_notice = extract_fssai_notice(text);
        let sources = map_citations(citations);

        info!(
            product = %product_name,
            ingredients = ingredients.len(),
            health_score,
            sources = sources.len(),
            notice = fssai_notice.is_some(),
            "Parsed report"
        );

        Ok(AnalysisResult {
            product_name,
            summary,
            ingredients,
            sources,
            fssai_notice,
            health_score,
        })
    }
}
