//! The applicant being profiled
//!
//! An [`Applicant`] is built once per request from validated input and is
//! never mutated afterwards. Risk policies only read it through the query
//! methods below.

use serde::{Deserialize, Serialize};

use crate::assets::{House, Vehicle};
use crate::collection::ItemCollection;
use crate::error::PartyError;
use crate::risk_answer::RiskAnswer;

/// Gender of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Marital status of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
}

/// Immutable description of an insurance applicant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    age: u32,
    gender: Gender,
    marital_status: MaritalStatus,
    dependents: u32,
    income: u64,
    risk_answers: Vec<RiskAnswer>,
    houses: ItemCollection<House>,
    vehicles: ItemCollection<Vehicle>,
}

impl Applicant {
    /// Starts building an applicant
    pub fn builder() -> ApplicantBuilder {
        ApplicantBuilder::default()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn marital_status(&self) -> MaritalStatus {
        self.marital_status
    }

    pub fn dependents(&self) -> u32 {
        self.dependents
    }

    pub fn income(&self) -> u64 {
        self.income
    }

    pub fn risk_answers(&self) -> &[RiskAnswer] {
        &self.risk_answers
    }

    /// Sum of the risk question weights, saturating at the `i32` bounds
    pub fn base_score(&self) -> i32 {
        self.risk_answers
            .iter()
            .map(RiskAnswer::weight)
            .fold(0, i32::saturating_add)
    }

    pub fn has_income(&self) -> bool {
        self.income > 0
    }

    pub fn is_income_above(&self, threshold: u64) -> bool {
        self.income > threshold
    }

    pub fn is_under_age(&self, age: u32) -> bool {
        self.age < age
    }

    pub fn is_over_age(&self, age: u32) -> bool {
        self.age > age
    }

    pub fn is_married(&self) -> bool {
        self.marital_status == MaritalStatus::Married
    }

    pub fn has_dependents(&self) -> bool {
        self.dependents > 0
    }

    pub fn houses(&self) -> &ItemCollection<House> {
        &self.houses
    }

    pub fn vehicles(&self) -> &ItemCollection<Vehicle> {
        &self.vehicles
    }

    pub fn has_houses(&self) -> bool {
        !self.houses.is_empty()
    }

    pub fn has_vehicles(&self) -> bool {
        !self.vehicles.is_empty()
    }

    pub fn houses_count(&self) -> usize {
        self.houses.len()
    }

    pub fn vehicles_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn house_at(&self, index: usize) -> Option<&House> {
        self.houses.get_at(index)
    }

    pub fn vehicle_at(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get_at(index)
    }

    /// Mortgaged houses in insertion order
    pub fn mortgaged_houses(&self) -> Vec<&House> {
        self.houses.iter().filter(|house| house.is_mortgaged()).collect()
    }

    pub fn has_mortgaged_houses(&self) -> bool {
        self.houses.iter().any(House::is_mortgaged)
    }
}

/// Builder for [`Applicant`]
///
/// Age, gender and marital status are required. Everything else defaults
/// to zero or empty.
#[derive(Debug, Clone, Default)]
pub struct ApplicantBuilder {
    age: Option<u32>,
    gender: Option<Gender>,
    marital_status: Option<MaritalStatus>,
    dependents: u32,
    income: u64,
    risk_answers: Vec<RiskAnswer>,
    houses: Vec<House>,
    vehicles: Vec<Vehicle>,
}

impl ApplicantBuilder {
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn marital_status(mut self, status: MaritalStatus) -> Self {
        self.marital_status = Some(status);
        self
    }

    pub fn dependents(mut self, dependents: u32) -> Self {
        self.dependents = dependents;
        self
    }

    pub fn income(mut self, income: u64) -> Self {
        self.income = income;
        self
    }

    pub fn risk_answers<A>(mut self, answers: impl IntoIterator<Item = A>) -> Self
    where
        A: Into<RiskAnswer>,
    {
        self.risk_answers = answers.into_iter().map(Into::into).collect();
        self
    }

    pub fn house(mut self, house: House) -> Self {
        self.houses.push(house);
        self
    }

    pub fn houses(mut self, houses: impl IntoIterator<Item = House>) -> Self {
        self.houses.extend(houses);
        self
    }

    pub fn vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    pub fn vehicles(mut self, vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        self.vehicles.extend(vehicles);
        self
    }

    /// Validates the collected data and builds the applicant
    ///
    /// # Errors
    ///
    /// - [`PartyError::MissingField`] if age, gender or marital status is unset
    /// - [`PartyError::InvalidRiskAnswer`] for a binary answer outside {0, 1}
    /// - [`PartyError::DuplicateKey`] if two houses or two vehicles share a key
    pub fn build(self) -> Result<Applicant, PartyError> {
        let age = self.age.ok_or(PartyError::MissingField("age"))?;
        let gender = self.gender.ok_or(PartyError::MissingField("gender"))?;
        let marital_status = self
            .marital_status
            .ok_or(PartyError::MissingField("marital_status"))?;

        if let Some((index, answer)) = self
            .risk_answers
            .iter()
            .enumerate()
            .find(|(_, answer)| !answer.is_valid())
        {
            let value = match answer {
                RiskAnswer::Binary(value) => *value,
                _ => 0,
            };
            return Err(PartyError::InvalidRiskAnswer { index, value });
        }

        Ok(Applicant {
            age,
            gender,
            marital_status,
            dependents: self.dependents,
            income: self.income,
            risk_answers: self.risk_answers,
            houses: ItemCollection::from_items(self.houses)?,
            vehicles: ItemCollection::from_items(self.vehicles)?,
        })
    }
}
