//! NutriScan Extractor
//!
//! Converts a free-form generated product report into a typed
//! [`AnalysisResult`](nutriscan_domain::AnalysisResult).
//!
//! # Overview
//!
//! The generative backend is asked to answer in a loose line format:
//!
//! ```text
//! PRODUCT: <name>
//! SUMMARY: <text, may span lines>
//! HEALTH_SCORE: <1-100>
//! FSSAI_NOTICE: <text | None>
//! LIST_START
//! <name> | <quantity> | <status> | <reason>
//! LIST_END
//! ```
//!
//! Model output drifts from that format, so extraction runs as a set of
//! independent passes over the immutable text, each of which degrades to a
//! default on its own. Only the ingredient table is mandatory: a report that
//! yields no rows is rejected outright.
//!
//! # Architecture
//!
//! ```text
//! Query → ReportGenerator → text + citations → ReportParser → AnalysisResult
//! ```
//!
//! # Example Usage
//!
//! ```
//! use nutriscan_extractor::{IngredientStatus, ReportParser};
//!
//! let report = "PRODUCT: Test Snack\n\
//!               HEALTH_SCORE: 35\n\
//!               LIST_START\n\
//!               Sugar | 35g | harmful | Refined sugar\n\
//!               LIST_END";
//!
//! let result = ReportParser::default().parse(report, &[], "test snack").unwrap();
//! assert_eq!(result.product_name, "Test Snack");
//! assert_eq!(result.health_score, 35);
//! assert_eq!(result.ingredients[0].status, IngredientStatus::Harmful);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod citations;
mod classify;
mod config;
mod error;
mod fields;
mod parser;
mod table;


pub use analyzer::{AnalysisError, Analyzer, QueryTicket};
pub use citations::map_citations;
pub use classify::{classify_status, HARMFUL_KEYWORDS, HEALTHY_KEYWORDS};
pub use config::{
    ParserConfig, DEFAULT_DESCRIPTION, DEFAULT_HEALTH_SCORE, DEFAULT_QUANTITY, DEFAULT_SUMMARY,
    MIN_ROW_FIELDS,
};
pub use error::{ExtractorError, NO_INGREDIENTS};
pub use parser::ReportParser;

pub use nutriscan_domain::{AnalysisResult, Ingredient, IngredientStatus, RawCitation, Source};
