//! Analysis module - the typed record extracted from one report

use crate::ingredient::Ingredient;
use crate::score::ScoreTier;
use crate::source::Source;
use serde::{Deserialize, Serialize};

/// Structured analysis of one product
///
/// Built once per parse and never mutated afterwards. A value of this type
/// always carries at least one ingredient; the parser rejects reports that
/// yield none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Product name from the report, or the user's query
    pub product_name: String,

    /// Free-text summary
    pub summary: String,

    /// Ingredient assessments in report order
    pub ingredients: Vec<Ingredient>,

    /// Web sources in citation order
    pub sources: Vec<Source>,

    /// Regulatory notice, if the report raised one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fssai_notice: Option<String>,

    /// Health score in `[0, 100]`
    pub health_score: u8,
}

impl AnalysisResult {
    /// Display band for the health score
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.health_score)
    }

    /// Ingredients not flagged as harmful, in order
    pub fn safe_ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| !i.status.is_concern())
    }

    /// Ingredients flagged as harmful, in order
    pub fn concerns(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| i.status.is_concern())
    }
}
