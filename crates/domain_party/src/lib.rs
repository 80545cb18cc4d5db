//! Applicant Domain
//!
//! This crate models the applicant whose risk profile is being computed:
//! personal facts, risk question answers, and the houses and vehicles they
//! want insured.
//!
//! An [`Applicant`] is immutable once built. It exposes only query methods,
//! which is all the risk policies need.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::{Applicant, Gender, House, HouseStatus, MaritalStatus, Vehicle};
//!
//! let applicant = Applicant::builder()
//!     .age(35)
//!     .gender(Gender::Female)
//!     .marital_status(MaritalStatus::Married)
//!     .dependents(2)
//!     .income(150_000)
//!     .risk_answers([0u8, 1, 0])
//!     .house(House::new(0, 12345, HouseStatus::Mortgaged))
//!     .vehicle(Vehicle::new(0, "Maker", "Model A", 2018))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(applicant.base_score(), 1);
//! assert!(applicant.has_mortgaged_houses());
//! ```

pub mod applicant;
pub mod assets;
pub mod collection;
pub mod error;
pub mod risk_answer;

pub use applicant::{Applicant, ApplicantBuilder, Gender, MaritalStatus};
pub use assets::{House, HouseStatus, InsuredItem, Vehicle};
pub use collection::ItemCollection;
pub use error::PartyError;
pub use risk_answer::RiskAnswer;
