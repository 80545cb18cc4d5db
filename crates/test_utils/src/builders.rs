//! Test Data Builders
//!
//! Builder with sensible defaults so tests only spell out the fields that
//! matter to them.

use core_kernel::ItemKey;
use domain_party::{
    Applicant, Gender, House, HouseStatus, MaritalStatus, PartyError, RiskAnswer, Vehicle,
};

/// Builder for constructing test applicants
///
/// Defaults: age 45, female, single, no dependents, 100k income,
/// answers [0, 0, 0], no houses, no vehicles.
#[derive(Debug, Clone)]
pub struct TestApplicantBuilder {
    age: u32,
    gender: Gender,
    marital_status: MaritalStatus,
    dependents: u32,
    income: u64,
    risk_answers: Vec<RiskAnswer>,
    houses: Vec<House>,
    vehicles: Vec<Vehicle>,
}

impl Default for TestApplicantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApplicantBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            age: 45,
            gender: Gender::Female,
            marital_status: MaritalStatus::Single,
            dependents: 0,
            income: 100_000,
            risk_answers: vec![RiskAnswer::Binary(0); 3],
            houses: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn married(mut self) -> Self {
        self.marital_status = MaritalStatus::Married;
        self
    }

    pub fn with_dependents(mut self, dependents: u32) -> Self {
        self.dependents = dependents;
        self
    }

    pub fn with_income(mut self, income: u64) -> Self {
        self.income = income;
        self
    }

    /// Sets binary answers
    pub fn with_answers(mut self, answers: &[u8]) -> Self {
        self.risk_answers = answers.iter().copied().map(RiskAnswer::Binary).collect();
        self
    }

    /// Adds an owned house
    pub fn with_owned_house(mut self, key: i64) -> Self {
        self.houses.push(House::new(key, 10_000 + key as u32, HouseStatus::Owned));
        self
    }

    /// Adds a mortgaged house
    pub fn with_mortgaged_house(mut self, key: i64) -> Self {
        self.houses
            .push(House::new(key, 10_000 + key as u32, HouseStatus::Mortgaged));
        self
    }

    /// Adds a vehicle of the given model year
    pub fn with_vehicle(mut self, key: i64, year: i32) -> Self {
        self.vehicles
            .push(Vehicle::new(ItemKey::new(key), "Maker", format!("Model {}", key), year));
        self
    }

    /// Builds the applicant, surfacing validation errors
    pub fn try_build(self) -> Result<Applicant, PartyError> {
        Applicant::builder()
            .age(self.age)
            .gender(self.gender)
            .marital_status(self.marital_status)
            .dependents(self.dependents)
            .income(self.income)
            .risk_answers(self.risk_answers)
            .houses(self.houses)
            .vehicles(self.vehicles)
            .build()
    }

    /// Builds the applicant
    ///
    /// # Panics
    ///
    /// Panics if the data is invalid, e.g. duplicate item keys.
    pub fn build(self) -> Applicant {
        self.try_build().expect("Failed to build test applicant")
    }
}
