//! Keyword classifier for free-text ingredient status labels

use nutriscan_domain::IngredientStatus;

/// Keywords that mark an ingredient as harmful. Checked first.
pub const HARMFUL_KEYWORDS: &[&str] = &["harmful", "bad", "danger", "concern"];

/// Keywords that mark an ingredient as healthy
pub const HEALTHY_KEYWORDS: &[&str] = &["healthy", "good", "safe"];

/// Fold a status label into the closed taxonomy
///
/// Matching is substring containment on the lower-cased label, so
/// "Potentially harmful" and "considered safe" both classify. Harmful
/// keywords take precedence over healthy ones; a label matching neither is
/// neutral.
pub fn classify_status(label: &str) -> IngredientStatus {
    let label = label.to_lowercase();

    if HARMFUL_KEYWORDS.iter().any(|k| label.contains(k)) {
        IngredientStatus::Harmful
    } else if HEALTHY_KEYWORDS.iter().any(|k| label.contains(k)) {
        IngredientStatus::Healthy
    } else {
        IngredientStatus::Neutral
    }
}
