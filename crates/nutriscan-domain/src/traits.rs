//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction engine and the
//! generative backend. Implementations live in other crates.

use crate::source::RawCitation;
use std::fmt::Display;

/// Raw output of one generation call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedReport {
    /// Report text, possibly empty
    pub text: String,

    /// Citations attached by the backend
    pub citations: Vec<RawCitation>,
}

impl GeneratedReport {
    /// Report with no citations
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }
}

/// Error signal coming back from the generative backend
pub trait UpstreamFailure: Display {
    /// Whether the failure is a quota or rate-limit condition
    fn is_rate_limited(&self) -> bool;

    /// The backend's own message, without any classification prefix
    fn message(&self) -> String;
}

/// Trait for producing a report about a product
///
/// Implemented by the infrastructure layer (nutriscan-llm)
pub trait ReportGenerator {
    /// Error type for generation
    type Error: UpstreamFailure;

    /// Generate a report for the given product query
    fn generate(&self, query: &str) -> Result<GeneratedReport, Self::Error>;
}
