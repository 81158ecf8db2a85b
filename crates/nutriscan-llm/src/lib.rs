//! NutriScan Generator Layer
//!
//! Upstream-side pieces of the report pipeline that do not involve transport.
//!
//! # Architecture
//!
//! This crate provides implementations of the `ReportGenerator` trait from
//! `nutriscan-domain`, and the error type every generator reports with.
//! The HTTP client for a real generative backend is supplied by the embedding
//! application; it only has to turn its failures into a [`GenerationError`]
//! through [`GenerationError::from_signal`].
//!
//! # Generators
//!
//! - `MockGenerator`: Deterministic canned reports for testing and offline use
//!
//! # Examples
//!
//! ```
//! use nutriscan_llm::MockGenerator;
//! use nutriscan_domain::traits::ReportGenerator;
//!
//! let generator = MockGenerator::new("PRODUCT: Oat Bar");
//! let report = generator.generate("oat bar").unwrap();
//! assert_eq!(report.text, "PRODUCT: Oat Bar");
//! ```

#![warn(missing_docs)]

use nutriscan_domain::traits::{GeneratedReport, ReportGenerator, UpstreamFailure};
use nutriscan_domain::RawCitation;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

/// Message fragments that identify quota exhaustion, matched case-insensitively
///
/// The 429 status is not a fragment; it only counts as a whole word, since
/// digit runs inside request ids and hashes often contain it.
pub const RATE_LIMIT_MARKERS: &[&str] = &["resource_exhausted", "quota", "rate limit"];

/// HTTP status used by backends for rate limiting
pub const RATE_LIMIT_STATUS: u16 = 429;

/// Errors that can occur while generating a report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Quota or rate limit exhausted
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Generic error
    #[error("Generation error: {0}")]
    Other(String),
}

impl GenerationError {
    /// Classify an upstream error signal
    ///
    /// A 429 status, a message carrying one of [`RATE_LIMIT_MARKERS`], or a
    /// message with "429" as a standalone word yields `RateLimitExceeded`;
    /// anything else is a `Communication` error carrying the raw message.
    pub fn from_signal(status: Option<u16>, message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();

        let status_word = RATE_LIMIT_STATUS.to_string();
        let rate_limited = status == Some(RATE_LIMIT_STATUS)
            || RATE_LIMIT_MARKERS.iter().any(|m| lowered.contains(m))
            || lowered
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|word| word == status_word);

        debug!(?status, rate_limited, "Classified upstream error signal");

        if rate_limited {
            GenerationError::RateLimitExceeded(message)
        } else {
            GenerationError::Communication(message)
        }
    }
}

impl UpstreamFailure for GenerationError {
    fn is_rate_limited(&self) -> bool {
        matches!(self, GenerationError::RateLimitExceeded(_))
    }

    fn message(&self) -> String {
        match self {
            GenerationError::Communication(message)
            | GenerationError::RateLimitExceeded(message)
            | GenerationError::Other(message) => message.clone(),
        }
    }
}

/// Mock generator for deterministic testing
///
/// Returns pre-configured reports without making any network calls.
///
/// # Examples
///
/// ```
/// use nutriscan_llm::{GenerationError, MockGenerator};
/// use nutriscan_domain::traits::ReportGenerator;
///
/// let mut generator = MockGenerator::default();
/// generator.add_response("chips", "PRODUCT: Chips");
/// generator.add_error("cola", GenerationError::RateLimitExceeded("quota".into()));
///
/// assert_eq!(generator.generate("chips").unwrap().text, "PRODUCT: Chips");
/// assert!(generator.generate("cola").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_report: GeneratedReport,
    responses: Arc<Mutex<HashMap<String, Result<GeneratedReport, GenerationError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGenerator {
    /// Create a new MockGenerator with a fixed report for all queries
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            default_report: GeneratedReport::text_only(text),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Attach citations to the default report
    pub fn with_citations(mut self, citations: Vec<RawCitation>) -> Self {
        self.default_report.citations = citations;
        self
    }

    /// Add a specific report for a given query
    pub fn add_response(&mut self, query: impl Into<String>, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.into(), Ok(GeneratedReport::text_only(text)));
    }

    /// Configure to return an error for a specific query
    pub fn add_error(&mut self, query: impl Into<String>, error: GenerationError) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.into(), Err(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("")
    }
}

impl ReportGenerator for MockGenerator {
    type Error = GenerationError;

    fn generate(&self, query: &str) -> Result<GeneratedReport, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(query) {
            return response.clone();
        }

        Ok(self.default_report.clone())
    }
}
