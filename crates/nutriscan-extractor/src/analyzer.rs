//! Generator-to-parser orchestration
//!
//! The [`Analyzer`] makes one generation call per query, parses the result,
//! and folds every failure into a single [`AnalysisError`]. It never retries.

use crate::error::ExtractorError;
use crate::parser::ReportParser;
use nutriscan_domain::traits::{ReportGenerator, UpstreamFailure};
use nutriscan_domain::AnalysisResult;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Terminal outcome of a failed analysis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The generator returned no text
    #[error("Empty response from generator")]
    EmptyResponse,

    /// Text was received but no ingredients could be extracted
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// The generator reported quota exhaustion
    #[error("Upstream rate limited: {0}")]
    RateLimited(String),

    /// Any other generator or transport failure
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl AnalysisError {
    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::RateLimited(_) => {
                "The analysis service is receiving too many requests right now. \
                 Please wait a minute and try again."
                    .to_string()
            }
            AnalysisError::Upstream(message) => message.clone(),
            AnalysisError::EmptyResponse => {
                "The analysis service returned an empty report. Please try again.".to_string()
            }
            AnalysisError::Extraction(_) => {
                "The ingredient list could not be read from the report. \
                 Try a more specific product name."
                    .to_string()
            }
        }
    }
}

impl From<ExtractorError> for AnalysisError {
    fn from(e: ExtractorError) -> Self {
        match e {
            ExtractorError::EmptyResponse => AnalysisError::EmptyResponse,
            ExtractorError::Extraction(message) | ExtractorError::Config(message) => {
                AnalysisError::Extraction(message)
            }
        }
    }
}

/// Handle identifying one query issued through an [`Analyzer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    /// Position of the query in issue order, starting at 1
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Runs a generator and the report parser for product queries
pub struct Analyzer<G>
where
    G: ReportGenerator,
{
    generator: G,
    parser: ReportParser,
    latest: AtomicU64,
}

impl<G> Analyzer<G>
where
    G: ReportGenerator,
{
    /// Create a new Analyzer
    pub fn new(generator: G, parser: ReportParser) -> Self {
        Self {
            generator,
            parser,
            latest: AtomicU64::new(0),
        }
    }

    /// The generator in use
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Register a new query, superseding every earlier ticket
    pub fn begin_query(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no newer query has been registered since `ticket`
    pub fn is_current(&self, ticket: &QueryTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Analyze one product query
    pub fn analyze(&self, query: &str) -> Result<AnalysisResult, AnalysisError> {
        info!(query, "Starting analysis");

        let report = self.generator.generate(query).map_err(|e| {
            if e.is_rate_limited() {
                warn!(error = %e, "Generator rate limited");
                AnalysisError::RateLimited(e.message())
            } else {
                warn!(error = %e, "Generator failed");
                AnalysisError::Upstream(e.message())
            }
        })?;

        debug!(
            len = report.text.len(),
            citations = report.citations.len(),
            "Received report"
        );

        Ok(self.parser.parse(&report.text, &report.citations, query)?)
    }

    /// Analyze a query registered with [`begin_query`](Self::begin_query)
    ///
    /// Returns `Ok(None)` when a newer query was registered while this one
    /// was running; the stale outcome, success or failure, is dropped.
    pub fn analyze_tracked(
        &self,
        ticket: &QueryTicket,
        query: &str,
    ) -> Result<Option<AnalysisResult>, AnalysisError> {
        let outcome = self.analyze(query);

        if !self.is_current(ticket) {
            debug!(sequence = ticket.0, "Discarding stale analysis");
            return Ok(None);
        }

        outcome.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_errors_map_by_kind() {
        assert_eq!(
            AnalysisError::from(ExtractorError::EmptyResponse),
            AnalysisError::EmptyResponse
        );
        assert!(matches!(
            AnalysisError::from(ExtractorError::no_ingredients()),
            AnalysisError::Extraction(_)
        ));
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let rate = AnalysisError::RateLimited("quota".to_string()).user_message();
        let upstream = AnalysisError::Upstream("connection reset".to_string()).user_message();
        let extraction = AnalysisError::Extraction("x".to_string()).user_message();

        assert!(rate.contains("try again"));
        assert_eq!(upstream, "connection reset");
        assert_ne!(rate, extraction);
    }
}
