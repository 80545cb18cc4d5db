//! Insured items
//!
//! Houses and vehicles are scored individually under their line of
//! insurance, so each carries a caller-supplied [`ItemKey`].

use chrono::NaiveDate;
use core_kernel::{years_since_model_year, ItemKey};
use serde::{Deserialize, Serialize};

/// An item that can be held in an [`ItemCollection`](crate::ItemCollection)
pub trait InsuredItem {
    /// Collection name used in error messages
    const KIND: &'static str;

    /// Returns the item's key within its collection
    fn item_key(&self) -> ItemKey;
}

/// Ownership status of a house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseStatus {
    Owned,
    Mortgaged,
}

/// A house owned by the applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub key: ItemKey,
    pub zip_code: u32,
    pub status: HouseStatus,
}

impl House {
    pub fn new(key: impl Into<ItemKey>, zip_code: u32, status: HouseStatus) -> Self {
        Self {
            key: key.into(),
            zip_code,
            status,
        }
    }

    pub fn is_mortgaged(&self) -> bool {
        self.status == HouseStatus::Mortgaged
    }
}

impl InsuredItem for House {
    const KIND: &'static str = "house";

    fn item_key(&self) -> ItemKey {
        self.key
    }
}

/// A vehicle owned by the applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub key: ItemKey,
    pub make: String,
    pub model: String,
    /// Model year
    pub year: i32,
}

impl Vehicle {
    pub fn new(
        key: impl Into<ItemKey>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            key: key.into(),
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    /// Whole calendar years between the model year and `reference`
    pub fn years_since_production(&self, reference: NaiveDate) -> i32 {
        years_since_model_year(self.year, reference)
    }
}

impl InsuredItem for Vehicle {
    const KIND: &'static str = "vehicle";

    fn item_key(&self) -> ItemKey {
        self.key
    }
}
