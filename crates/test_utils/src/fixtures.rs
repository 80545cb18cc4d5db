//! Pre-built Test Fixtures
//!
//! Ready-to-use applicants and dates. All vehicle ages are meant to be
//! measured against [`TemporalFixtures::reference_date`].

use chrono::NaiveDate;
use domain_party::{Applicant, Gender, House, HouseStatus, MaritalStatus, Vehicle};
use serde_json::{json, Value};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Fixed reference date for vehicle ages (Jun 15, 2024)
    pub fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
    }

    /// Model year that is exactly at the recency window edge (5 years)
    pub fn edge_of_window_year() -> i32 {
        2019
    }

    /// Model year just outside the recency window
    pub fn old_vehicle_year() -> i32 {
        2018
    }
}

/// Fixture for applicants used across scenarios
pub struct ApplicantFixtures;

impl ApplicantFixtures {
    /// 25, single, no dependents, 50k income, no houses or vehicles, all-zero answers
    pub fn young_single_without_assets() -> Applicant {
        Applicant::builder()
            .age(25)
            .gender(Gender::Male)
            .marital_status(MaritalStatus::Single)
            .dependents(0)
            .income(50_000)
            .risk_answers([0u8, 0, 0])
            .build()
            .expect("valid fixture")
    }

    /// 35, single, 50k income, one mortgaged house keyed 0, all-zero answers
    pub fn single_mortgaged_homeowner() -> Applicant {
        Applicant::builder()
            .age(35)
            .gender(Gender::Female)
            .marital_status(MaritalStatus::Single)
            .dependents(0)
            .income(50_000)
            .risk_answers([0u8, 0, 0])
            .house(House::new(0, 12345, HouseStatus::Mortgaged))
            .build()
            .expect("valid fixture")
    }

    /// 45, married, 2 dependents, 250k income, two recent vehicles, answers [0, 1, 0]
    pub fn married_high_earner_with_vehicles() -> Applicant {
        Applicant::builder()
            .age(45)
            .gender(Gender::Female)
            .marital_status(MaritalStatus::Married)
            .dependents(2)
            .income(250_000)
            .risk_answers([0u8, 1, 0])
            .vehicles([
                Vehicle::new(0, "Maker", "Model A", 2021),
                Vehicle::new(1, "Maker", "Model B", 2023),
            ])
            .build()
            .expect("valid fixture")
    }

    /// 65, married, retired on 40k income, one owned house
    pub fn retiree_homeowner() -> Applicant {
        Applicant::builder()
            .age(65)
            .gender(Gender::Male)
            .marital_status(MaritalStatus::Married)
            .income(40_000)
            .risk_answers([1u8, 1, 0])
            .house(House::new(3, 54321, HouseStatus::Owned))
            .build()
            .expect("valid fixture")
    }
}

/// Fixture for raw request payloads
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// A complete, valid risk profile request body
    pub fn risk_profile_request() -> Value {
        json!({
            "age": 35,
            "gender": "female",
            "marital_status": "married",
            "dependents": 2,
            "income": 150000,
            "risk_questions": [0, 1, 0],
            "houses": [
                {"key": 0, "zip_code": 123, "status": "owned"},
                {"key": 1, "zip_code": 456, "status": "mortgaged"}
            ],
            "vehicles": [
                {"key": 0, "make": "Maker", "model": "Model A", "year": 2008},
                {"key": 1, "make": "Maker", "model": "Model B", "year": 2018}
            ]
        })
    }
}
