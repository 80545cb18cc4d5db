//! Core Kernel - Foundational types shared by every risk profiler crate
//!
//! This crate provides the vocabulary the applicant model and the scoring
//! engine agree on:
//! - Lines of insurance, the only keys of the score store
//! - Item keys identifying insured houses and vehicles
//! - Model-year arithmetic against a reference date

pub mod line;
pub mod identifiers;
pub mod temporal;
pub mod error;

pub use line::LineOfInsurance;
pub use identifiers::ItemKey;
pub use temporal::{years_since_model_year, ReferenceDate};
pub use error::CoreError;
