//! API configuration

use core_kernel::ReferenceDate;
use domain_risk::{CalculatorConfig, DEFAULT_LARGE_INCOME_THRESHOLD, DEFAULT_RECENT_VEHICLE_YEARS};
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Income above which every line loses a point
    pub large_income_threshold: u64,
    /// Age in years up to which a vehicle counts as recent
    pub recent_vehicle_years: i32,
    /// Date vehicle ages are measured against: `today` or `YYYY-MM-DD`
    pub reference_date: ReferenceDate,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            large_income_threshold: DEFAULT_LARGE_INCOME_THRESHOLD,
            recent_vehicle_years: DEFAULT_RECENT_VEHICLE_YEARS,
            reference_date: ReferenceDate::Today,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their default.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Calculator settings derived from this configuration
    pub fn calculator_config(&self) -> CalculatorConfig {
        CalculatorConfig {
            large_income_threshold: self.large_income_threshold,
            recent_vehicle_years: self.recent_vehicle_years,
            reference_date: self.reference_date,
        }
    }
}
