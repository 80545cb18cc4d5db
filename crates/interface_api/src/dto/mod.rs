//! Request and response data transfer objects

pub mod risk_profile;
