//! Risk question answers
//!
//! Each answer contributes a numeric weight to the applicant's base score.

use serde::{Deserialize, Serialize};

/// Answer to one risk question
///
/// Answers arrive either as a plain 0/1 (or boolean) or as an object that
/// carries its own weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskAnswer {
    /// Yes/no answer given as a boolean
    Flag(bool),
    /// Yes/no answer given as 0 or 1
    Binary(u8),
    /// Answer with an explicit weight
    Weighted {
        weight: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        question: Option<String>,
    },
}

impl RiskAnswer {
    /// Returns the answer's contribution to the base score
    pub fn weight(&self) -> i32 {
        match self {
            RiskAnswer::Flag(true) => 1,
            RiskAnswer::Flag(false) => 0,
            RiskAnswer::Binary(value) => i32::from(*value),
            RiskAnswer::Weighted { weight, .. } => *weight,
        }
    }

    /// Whether the answer is a well-formed value
    pub fn is_valid(&self) -> bool {
        !matches!(self, RiskAnswer::Binary(value) if *value > 1)
    }
}

impl From<bool> for RiskAnswer {
    fn from(value: bool) -> Self {
        RiskAnswer::Flag(value)
    }
}

impl From<u8> for RiskAnswer {
    fn from(value: u8) -> Self {
        RiskAnswer::Binary(value)
    }
}
