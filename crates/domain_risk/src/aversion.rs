//! Risk aversion categories
//!
//! Final scores are projected onto three ordered categories:
//!
//! ```text
//! score <= 0      -> adventurous
//! score in 1..=2  -> average
//! score >= 3      -> conservative
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk aversion category, ordered by increasing caution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAversion {
    Adventurous,
    Average,
    Conservative,
}

impl RiskAversion {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAversion::Adventurous => "adventurous",
            RiskAversion::Average => "average",
            RiskAversion::Conservative => "conservative",
        }
    }
}

impl fmt::Display for RiskAversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps integer scores to [`RiskAversion`] categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AversionMapping {
    average_from: i32,
    conservative_from: i32,
}

impl AversionMapping {
    /// Lowest score classified as average
    pub const AVERAGE_FROM: i32 = 1;
    /// Lowest score classified as conservative
    pub const CONSERVATIVE_FROM: i32 = 3;

    /// Creates the standard mapping
    pub fn new() -> Self {
        Self {
            average_from: Self::AVERAGE_FROM,
            conservative_from: Self::CONSERVATIVE_FROM,
        }
    }

    /// Creates a mapping with custom lower bounds
    ///
    /// `conservative_from` is expected to be at least `average_from`.
    pub fn with_thresholds(average_from: i32, conservative_from: i32) -> Self {
        Self {
            average_from,
            conservative_from: conservative_from.max(average_from),
        }
    }

    /// Classifies a single score
    pub fn aversion_for(&self, score: i32) -> RiskAversion {
        if score >= self.conservative_from {
            RiskAversion::Conservative
        } else if score >= self.average_from {
            RiskAversion::Average
        } else {
            RiskAversion::Adventurous
        }
    }
}

impl Default for AversionMapping {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let mapping = AversionMapping::new();
        assert_eq!(mapping.aversion_for(-5), RiskAversion::Adventurous);
        assert_eq!(mapping.aversion_for(0), RiskAversion::Adventurous);
        assert_eq!(mapping.aversion_for(1), RiskAversion::Average);
        assert_eq!(mapping.aversion_for(2), RiskAversion::Average);
        assert_eq!(mapping.aversion_for(3), RiskAversion::Conservative);
        assert_eq!(mapping.aversion_for(i32::MAX), RiskAversion::Conservative);
    }

    #[test]
    fn test_categories_ordered_by_caution() {
        assert!(RiskAversion::Adventurous < RiskAversion::Average);
        assert!(RiskAversion::Average < RiskAversion::Conservative);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&RiskAversion::Conservative).unwrap();
        assert_eq!(json, "\"conservative\"");
        assert_eq!(RiskAversion::Average.to_string(), "average");
    }

    #[test]
    fn test_custom_thresholds() {
        let mapping = AversionMapping::with_thresholds(0, 2);
        assert_eq!(mapping.aversion_for(-1), RiskAversion::Adventurous);
        assert_eq!(mapping.aversion_for(0), RiskAversion::Average);
        assert_eq!(mapping.aversion_for(2), RiskAversion::Conservative);
    }
}
