//! Risk profiles
//!
//! A [`RiskProfile`] is the result of a calculation: one risk aversion
//! category per active line, or one per insured item for item-scoped lines.
//! Lines disabled while the policies ran do not appear.

use std::collections::BTreeMap;

use core_kernel::{ItemKey, LineOfInsurance};

use crate::aversion::RiskAversion;

/// Risk aversion for one line of insurance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAversion {
    /// The whole line has a single category
    Single(RiskAversion),
    /// Each insured item has its own category
    PerItem(BTreeMap<ItemKey, RiskAversion>),
}

impl LineAversion {
    /// The category of a single-valued line
    pub fn single(&self) -> Option<RiskAversion> {
        match self {
            LineAversion::Single(aversion) => Some(*aversion),
            LineAversion::PerItem(_) => None,
        }
    }

    /// The category of one item of a per-item line
    pub fn item(&self, key: ItemKey) -> Option<RiskAversion> {
        match self {
            LineAversion::Single(_) => None,
            LineAversion::PerItem(items) => items.get(&key).copied(),
        }
    }
}

/// Final risk profile of an applicant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskProfile {
    lines: BTreeMap<LineOfInsurance, LineAversion>,
}

impl RiskProfile {
    pub fn line(&self, line: LineOfInsurance) -> Option<&LineAversion> {
        self.lines.get(&line)
    }

    pub fn contains(&self, line: LineOfInsurance) -> bool {
        self.lines.contains_key(&line)
    }

    /// Active lines with their categories, in line order
    pub fn lines(&self) -> impl Iterator<Item = (LineOfInsurance, &LineAversion)> {
        self.lines.iter().map(|(line, aversion)| (*line, aversion))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<(LineOfInsurance, LineAversion)> for RiskProfile {
    fn from_iter<I: IntoIterator<Item = (LineOfInsurance, LineAversion)>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
