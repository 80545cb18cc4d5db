//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the risk profiler test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built applicants and reference dates
//! - `builders`: Applicant builder with test defaults
//! - `generators`: Property-based applicant generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
