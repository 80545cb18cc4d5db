//! Risk Scoring Domain
//!
//! This crate computes an applicant's insurance risk profile. A fixed,
//! ordered chain of risk policies adjusts a score per line of insurance
//! (and per insured item for home and auto), and the final scores are
//! mapped to risk aversion categories.
//!
//! # Architecture
//!
//! - **Score store**: one scalar or keyed cell per line of insurance
//! - **Risk policies**: a closed set of rules, applied strictly in order
//! - **Aversion mapping**: score to adventurous / average / conservative
//! - **Profile calculator**: runs the chain on a fresh store and projects it
//!
//! # Calculation Flow
//!
//! ```text
//! Applicant (read-only) -> PolicyChain (mutates ScoreStore)
//!                       -> AversionMapping -> RiskProfile
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_risk::{CalculatorConfig, ProfileCalculator};
//! use core_kernel::LineOfInsurance;
//!
//! let calculator = ProfileCalculator::new(CalculatorConfig::default());
//! let profile = calculator.calculate(&applicant)?;
//!
//! if let Some(life) = profile.line(LineOfInsurance::Life) {
//!     println!("life: {:?}", life);
//! }
//! ```

pub mod aversion;
pub mod calculator;
pub mod error;
pub mod policies;
pub mod profile;
pub mod scoring;

pub use aversion::{AversionMapping, RiskAversion};
pub use calculator::{CalculatorConfig, ProfileCalculator};
pub use error::{InvalidOperationKind, ScoringError};
pub use policies::{
    EvaluationContext, PolicyChain, RiskPolicy, DEFAULT_LARGE_INCOME_THRESHOLD,
    DEFAULT_RECENT_VEHICLE_YEARS,
};
pub use profile::{LineAversion, RiskProfile};
pub use scoring::{ScoreCell, ScoreStore};
