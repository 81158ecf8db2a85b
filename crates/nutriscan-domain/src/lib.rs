//! NutriScan Domain Layer
//!
//! This crate contains the data model shared by every other NutriScan crate.
//! Its only external dependency is `serde`, because the model crosses JSON
//! boundaries on both sides: citation records arrive as JSON from the
//! generative backend, and results leave as JSON for the presentation layer.
//!
//! ## Key Concepts
//!
//! - **Report**: Raw text produced upstream describing one product
//! - **AnalysisResult**: The typed record extracted from a report
//! - **Ingredient**: One assessed ingredient with a three-way [`IngredientStatus`]
//! - **Source**: A web citation consulted while the report was generated
//! - **Score tiers**: Favorable / caution / adverse bands over the health score
//!
//! ## Architecture
//!
//! - Pure data and small pure helpers only
//! - Infrastructure (generators, parsers, the CLI) lives in other crates
//! - Trait definitions for the upstream generator live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod ingredient;
pub mod score;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use analysis::AnalysisResult;
pub use ingredient::{Ingredient, IngredientStatus};
pub use score::ScoreTier;
pub use source::{RawCitation, Source, WebReference};
pub use traits::{GeneratedReport, ReportGenerator, UpstreamFailure};
