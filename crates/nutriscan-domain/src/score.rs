//! Score module - display bands over the 0-100 health score

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the favorable band
pub const FAVORABLE_MIN: u8 = 70;

/// Lower bound (inclusive) of the caution band
pub const CAUTION_MIN: u8 = 40;

/// Band a health score falls into
///
/// - Favorable: 70 and above
/// - Caution: 40 to 69
/// - Adverse: below 40
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// Generally a good choice
    Favorable,

    /// Consume with some care
    Caution,

    /// Best avoided
    Adverse,
}

impl ScoreTier {
    /// Classify a health score
    pub fn from_score(score: u8) -> Self {
        if score >= FAVORABLE_MIN {
            ScoreTier::Favorable
        } else if score >= CAUTION_MIN {
            ScoreTier::Caution
        } else {
            ScoreTier::Adverse
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Favorable => "favorable",
            ScoreTier::Caution => "caution",
            ScoreTier::Adverse => "adverse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(100), ScoreTier::Favorable);
        assert_eq!(ScoreTier::from_score(70), ScoreTier::Favorable);
        assert_eq!(ScoreTier::from_score(69), ScoreTier::Caution);
        assert_eq!(ScoreTier::from_score(40), ScoreTier::Caution);
        assert_eq!(ScoreTier::from_score(39), ScoreTier::Adverse);
        assert_eq!(ScoreTier::from_score(0), ScoreTier::Adverse);
    }
}
