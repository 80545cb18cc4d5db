//! Date handling for vehicle age computation
//!
//! Vehicle age is measured in whole calendar years between the model year
//! and a reference date. The reference date defaults to today (UTC) and can
//! be pinned so that calculations are reproducible.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Number of calendar years between a model year and the reference date
///
/// A vehicle built in the reference year is zero years old. Model years in
/// the future yield a negative age.
pub fn years_since_model_year(model_year: i32, reference: NaiveDate) -> i32 {
    reference.year().saturating_sub(model_year)
}

/// The date vehicle ages are measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceDate {
    /// The current UTC date at resolution time
    #[default]
    Today,
    /// A fixed calendar date
    Fixed(NaiveDate),
}

impl ReferenceDate {
    /// Resolves to a concrete calendar date
    pub fn resolve(&self) -> NaiveDate {
        match self {
            ReferenceDate::Today => Utc::now().date_naive(),
            ReferenceDate::Fixed(date) => *date,
        }
    }
}

impl From<NaiveDate> for ReferenceDate {
    fn from(date: NaiveDate) -> Self {
        ReferenceDate::Fixed(date)
    }
}

impl From<Option<NaiveDate>> for ReferenceDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map(ReferenceDate::Fixed).unwrap_or_default()
    }
}

impl fmt::Display for ReferenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceDate::Today => f.write_str("today"),
            ReferenceDate::Fixed(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl FromStr for ReferenceDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("today") {
            return Ok(ReferenceDate::Today);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(ReferenceDate::Fixed)
            .map_err(|e| CoreError::invalid_date(format!("{}: {}", s, e)))
    }
}

impl Serialize for ReferenceDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ReferenceDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ReferenceDate::from_str(&s).map_err(serde::de::Error::custom)
    }
}
