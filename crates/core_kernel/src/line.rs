//! Lines of insurance
//!
//! The closed set of coverage categories the scoring engine keys all of its
//! state by. No other value ever appears as a key of the score store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line of insurance scored independently by the risk profiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOfInsurance {
    /// Life insurance, scored as a single value
    Life,
    /// Disability insurance, scored as a single value
    Disability,
    /// Home insurance, scored per house
    Home,
    /// Auto insurance, scored per vehicle
    Auto,
}

impl LineOfInsurance {
    /// Every line, in the order policies iterate them
    pub const ALL: [LineOfInsurance; 4] = [
        LineOfInsurance::Life,
        LineOfInsurance::Disability,
        LineOfInsurance::Home,
        LineOfInsurance::Auto,
    ];

    /// Returns the wire name of the line
    pub fn as_str(&self) -> &'static str {
        match self {
            LineOfInsurance::Life => "life",
            LineOfInsurance::Disability => "disability",
            LineOfInsurance::Home => "home",
            LineOfInsurance::Auto => "auto",
        }
    }

    /// Whether the line is scored per insured item rather than as a whole
    pub fn is_item_scoped(&self) -> bool {
        matches!(self, LineOfInsurance::Home | LineOfInsurance::Auto)
    }
}

impl fmt::Display for LineOfInsurance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
