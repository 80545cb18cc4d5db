//! Identifiers for insured items
//!
//! Item keys are supplied by the caller and are only unique within the
//! collection (houses or vehicles) that owns them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied key of an insured house or vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(i64);

impl ItemKey {
    /// Creates a key from its raw value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw key value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemKey {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemKey> for i64 {
    fn from(key: ItemKey) -> i64 {
        key.0
    }
}
