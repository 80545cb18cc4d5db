//! Profile calculation
//!
//! The [`ProfileCalculator`] runs the policy chain against a fresh score
//! store and projects the result onto risk aversion categories. Nothing is
//! shared between calls: each calculation owns its store and drops it once
//! the profile is built.

use chrono::NaiveDate;
use core_kernel::ReferenceDate;
use domain_party::Applicant;
use tracing::{debug, info};

use crate::aversion::AversionMapping;
use crate::error::ScoringError;
use crate::policies::{
    EvaluationContext, PolicyChain, DEFAULT_LARGE_INCOME_THRESHOLD, DEFAULT_RECENT_VEHICLE_YEARS,
};
use crate::profile::RiskProfile;
use crate::scoring::ScoreStore;

/// Tunable inputs of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Income above which every line loses a point
    pub large_income_threshold: u64,
    /// Vehicle age, in years, up to which a vehicle counts as recent
    pub recent_vehicle_years: i32,
    /// Date vehicle ages are measured against
    pub reference_date: ReferenceDate,
}

impl CalculatorConfig {
    /// Pins the reference date
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = ReferenceDate::Fixed(date);
        self
    }

    pub fn with_large_income_threshold(mut self, threshold: u64) -> Self {
        self.large_income_threshold = threshold;
        self
    }

    pub fn with_recent_vehicle_years(mut self, years: i32) -> Self {
        self.recent_vehicle_years = years;
        self
    }

    /// The standard chain parameterised by this configuration
    pub fn standard_chain(&self) -> PolicyChain {
        PolicyChain::standard(self.large_income_threshold, self.recent_vehicle_years)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            large_income_threshold: DEFAULT_LARGE_INCOME_THRESHOLD,
            recent_vehicle_years: DEFAULT_RECENT_VEHICLE_YEARS,
            reference_date: ReferenceDate::Today,
        }
    }
}

/// Computes risk profiles for applicants
///
/// # Example
///
/// ```rust,ignore
/// let calculator = ProfileCalculator::new(CalculatorConfig::default());
/// let profile = calculator.calculate(&applicant)?;
/// ```
#[derive(Debug, Clone)]
pub struct ProfileCalculator {
    config: CalculatorConfig,
    chain: PolicyChain,
    mapping: AversionMapping,
}

impl ProfileCalculator {
    /// Creates a calculator running the standard chain
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            chain: config.standard_chain(),
            config,
            mapping: AversionMapping::default(),
        }
    }

    /// Creates a calculator running a caller-supplied chain
    ///
    /// Policy parameters come from the chain itself. Only the reference
    /// date is taken from `config`.
    pub fn with_policies(config: CalculatorConfig, chain: PolicyChain) -> Self {
        Self {
            config,
            chain,
            mapping: AversionMapping::default(),
        }
    }

    /// Replaces the score to category mapping
    pub fn with_mapping(mut self, mapping: AversionMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn chain(&self) -> &PolicyChain {
        &self.chain
    }

    /// Runs the chain and returns the final scores, before projection
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if a policy addresses the store in the
    /// wrong shape. The whole calculation is abandoned.
    pub fn calculate_scores(&self, applicant: &Applicant) -> Result<ScoreStore, ScoringError> {
        let context = EvaluationContext::new(self.config.reference_date.resolve());
        debug!(
            policies = self.chain.len(),
            reference_date = %context.reference_date,
            "running risk policy chain"
        );

        let mut store = ScoreStore::new();
        self.chain.apply_all(applicant, &mut store, &context)?;
        Ok(store)
    }

    /// Computes the applicant's risk profile
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProfileCalculator::calculate_scores`].
    pub fn calculate(&self, applicant: &Applicant) -> Result<RiskProfile, ScoringError> {
        let store = self.calculate_scores(applicant)?;
        let profile = store.project(&self.mapping);

        info!(lines = profile.len(), "risk profile calculated");
        Ok(profile)
    }
}

impl Default for ProfileCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
