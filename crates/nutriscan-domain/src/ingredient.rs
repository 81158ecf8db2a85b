//! Ingredient module - one assessed ingredient of a product

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health classification of a single ingredient
///
/// The taxonomy is closed: every free-text status label coming from a report
/// is folded into one of these three values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientStatus {
    /// Beneficial or considered safe
    Healthy,

    /// Harmful, or flagged as a concern
    Harmful,

    /// No clear signal either way
    #[default]
    Neutral,
}

impl IngredientStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientStatus::Healthy => "healthy",
            IngredientStatus::Harmful => "harmful",
            IngredientStatus::Neutral => "neutral",
        }
    }

    /// Whether the ingredient belongs in the "concern" bucket
    pub fn is_concern(&self) -> bool {
        matches!(self, IngredientStatus::Harmful)
    }
}

impl fmt::Display for IngredientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the ingredient assessment table
///
/// Names are not unique; duplicates in the report are kept in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, never empty
    pub name: String,

    /// Free-text quantity ("35g per 100g", "40%", or a default)
    pub quantity: String,

    /// Classified health status
    pub status: IngredientStatus,

    /// Short reason behind the status
    pub description: String,
}

impl Ingredient {
    /// Create a new ingredient
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        status: IngredientStatus,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            status,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&IngredientStatus::Harmful).unwrap();
        assert_eq!(json, "\"harmful\"");
    }

    #[test]
    fn test_only_harmful_is_concern() {
        assert!(IngredientStatus::Harmful.is_concern());
        assert!(!IngredientStatus::Healthy.is_concern());
        assert!(!IngredientStatus::Neutral.is_concern());
    }

    #[test]
    fn test_default_status_is_neutral() {
        assert_eq!(IngredientStatus::default(), IngredientStatus::Neutral);
    }
}
