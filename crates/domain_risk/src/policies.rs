//! Risk policies
//!
//! A risk policy is one business rule. It reads the applicant and adjusts
//! the score store. Policies run strictly in chain order because later
//! policies depend on what earlier ones created or disabled:
//!
//! ```text
//! Initial -> NoIncome -> NoVehicle -> NoHouse -> Age -> LargeIncome
//!         -> MortgagedHouse -> Dependents -> MaritalStatus
//!         -> RecentVehicle -> SingleHouse -> SingleVehicle
//! ```

use std::fmt;

use chrono::NaiveDate;
use core_kernel::LineOfInsurance;
use domain_party::{Applicant, InsuredItem};
use tracing::debug;

use crate::error::ScoringError;
use crate::scoring::ScoreStore;

/// Default income above which every line loses a point
pub const DEFAULT_LARGE_INCOME_THRESHOLD: u64 = 200_000;

/// Default age, in years, up to which a vehicle counts as recent
pub const DEFAULT_RECENT_VEHICLE_YEARS: i32 = 5;

/// Facts a policy needs besides the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationContext {
    /// Date vehicle ages are measured against
    pub reference_date: NaiveDate,
}

impl EvaluationContext {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }
}

/// One rule of the policy chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskPolicy {
    /// Creates every line at the base score, with one item per house and vehicle
    Initial,
    /// Disables disability when the applicant has no income
    NoIncome,
    /// Disables auto when the applicant has no vehicles
    NoVehicle,
    /// Disables home when the applicant has no houses
    NoHouse,
    /// Under 30: -2 on every line. Under 40: -1. Over 60: disables disability and life
    Age,
    /// Income above the threshold: -1 on every line
    LargeIncome { threshold: u64 },
    /// Per mortgaged house: +1 disability and +1 on that house
    MortgagedHouse,
    /// Any dependents: +1 disability and +1 life
    Dependents,
    /// Married: +1 life and -1 disability
    MaritalStatus,
    /// Per vehicle no older than the window: +1 on that vehicle
    RecentVehicle { window_years: i32 },
    /// Exactly one house: +1 on it
    SingleHouse,
    /// Exactly one vehicle: +1 on it
    SingleVehicle,
}

impl RiskPolicy {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            RiskPolicy::Initial => "initial",
            RiskPolicy::NoIncome => "no_income",
            RiskPolicy::NoVehicle => "no_vehicle",
            RiskPolicy::NoHouse => "no_house",
            RiskPolicy::Age => "age",
            RiskPolicy::LargeIncome { .. } => "large_income",
            RiskPolicy::MortgagedHouse => "mortgaged_house",
            RiskPolicy::Dependents => "dependents",
            RiskPolicy::MaritalStatus => "marital_status",
            RiskPolicy::RecentVehicle { .. } => "recent_vehicle",
            RiskPolicy::SingleHouse => "single_house",
            RiskPolicy::SingleVehicle => "single_vehicle",
        }
    }

    /// Applies the rule to the store
    ///
    /// Operations on lines disabled by an earlier policy are no-ops.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` when the store is not in the shape
    /// `Initial` leaves it in, i.e. the chain is mis-ordered.
    pub fn apply(
        &self,
        applicant: &Applicant,
        store: &mut ScoreStore,
        context: &EvaluationContext,
    ) -> Result<(), ScoringError> {
        use core_kernel::LineOfInsurance::{Auto, Disability, Home, Life};

        match *self {
            RiskPolicy::Initial => {
                let base = applicant.base_score();

                for line in LineOfInsurance::ALL {
                    if line.is_item_scoped() {
                        store.create_keyed(line);
                    } else {
                        store.create_scalar(line, base);
                    }
                }

                for house in applicant.houses() {
                    store.create_item(Home, house.item_key(), base)?;
                }
                for vehicle in applicant.vehicles() {
                    store.create_item(Auto, vehicle.item_key(), base)?;
                }
            }
            RiskPolicy::NoIncome => {
                if !applicant.has_income() {
                    store.disable(Disability);
                }
            }
            RiskPolicy::NoVehicle => {
                if !applicant.has_vehicles() {
                    store.disable(Auto);
                }
            }
            RiskPolicy::NoHouse => {
                if !applicant.has_houses() {
                    store.disable(Home);
                }
            }
            RiskPolicy::Age => {
                if applicant.is_under_age(30) {
                    subtract_from_all_lines(store, 2)?;
                } else if applicant.is_under_age(40) {
                    subtract_from_all_lines(store, 1)?;
                } else if applicant.is_over_age(60) {
                    store.disable(Disability);
                    store.disable(Life);
                }
            }
            RiskPolicy::LargeIncome { threshold } => {
                if applicant.is_income_above(threshold) {
                    subtract_from_all_lines(store, 1)?;
                }
            }
            RiskPolicy::MortgagedHouse => {
                for house in applicant.mortgaged_houses() {
                    store.add(Disability, 1, None)?;
                    store.add(Home, 1, Some(house.item_key()))?;
                }
            }
            RiskPolicy::Dependents => {
                if applicant.has_dependents() {
                    store.add(Disability, 1, None)?;
                    store.add(Life, 1, None)?;
                }
            }
            RiskPolicy::MaritalStatus => {
                if applicant.is_married() {
                    store.add(Life, 1, None)?;
                    store.subtract(Disability, 1, None)?;
                }
            }
            RiskPolicy::RecentVehicle { window_years } => {
                for vehicle in applicant.vehicles() {
                    if vehicle.years_since_production(context.reference_date) <= window_years {
                        store.add(Auto, 1, Some(vehicle.item_key()))?;
                    }
                }
            }
            RiskPolicy::SingleHouse => {
                if applicant.houses_count() == 1 {
                    if let Some(house) = applicant.house_at(0) {
                        store.add(Home, 1, Some(house.item_key()))?;
                    }
                }
            }
            RiskPolicy::SingleVehicle => {
                if applicant.vehicles_count() == 1 {
                    if let Some(vehicle) = applicant.vehicle_at(0) {
                        store.add(Auto, 1, Some(vehicle.item_key()))?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for RiskPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn subtract_from_all_lines(store: &mut ScoreStore, points: i32) -> Result<(), ScoringError> {
    for line in LineOfInsurance::ALL {
        store.subtract(line, points, None)?;
    }
    Ok(())
}

/// Ordered sequence of risk policies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyChain {
    policies: Vec<RiskPolicy>,
}

impl PolicyChain {
    /// Creates a chain that runs `policies` in the given order
    pub fn new(policies: Vec<RiskPolicy>) -> Self {
        Self { policies }
    }

    /// The standard twelve-policy chain
    pub fn standard(large_income_threshold: u64, recent_vehicle_years: i32) -> Self {
        Self::new(vec![
            RiskPolicy::Initial,
            RiskPolicy::NoIncome,
            RiskPolicy::NoVehicle,
            RiskPolicy::NoHouse,
            RiskPolicy::Age,
            RiskPolicy::LargeIncome {
                threshold: large_income_threshold,
            },
            RiskPolicy::MortgagedHouse,
            RiskPolicy::Dependents,
            RiskPolicy::MaritalStatus,
            RiskPolicy::RecentVehicle {
                window_years: recent_vehicle_years,
            },
            RiskPolicy::SingleHouse,
            RiskPolicy::SingleVehicle,
        ])
    }

    pub fn policies(&self) -> &[RiskPolicy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Applies every policy in order, stopping at the first error
    pub fn apply_all(
        &self,
        applicant: &Applicant,
        store: &mut ScoreStore,
        context: &EvaluationContext,
    ) -> Result<(), ScoringError> {
        for policy in &self.policies {
            debug!(policy = policy.name(), "applying risk policy");
            policy.apply(applicant, store, context)?;
        }
        Ok(())
    }
}

impl Default for PolicyChain {
    fn default() -> Self {
        Self::standard(DEFAULT_LARGE_INCOME_THRESHOLD, DEFAULT_RECENT_VEHICLE_YEARS)
    }
}

impl FromIterator<RiskPolicy> for PolicyChain {
    fn from_iter<I: IntoIterator<Item = RiskPolicy>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
