//! Dossier configuration.
//!
//! Tick periods, temperature unit, history sizing, RNG seeding and the
//! venue schedule. Configuration can be assembled with
//! [`DossierConfigBuilder`] or parsed from JSON; either way it is validated
//! before a monitor accepts it.

use crate::core::{
    MissionSchedule, TemperatureUnit, VitalsHistory, DEFAULT_HISTORY_CAPACITY,
    DEFAULT_HISTORY_SEED,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod builder;
pub mod error;

pub use builder::DossierConfigBuilder;
pub use error::ConfigError;

pub const DEFAULT_VITALS_INTERVAL_MS: u64 = 3_000;
pub const DEFAULT_MISSION_INTERVAL_MS: u64 = 3_600_000;

/// Settings for a [`DossierMonitor`](crate::monitor::DossierMonitor).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DossierConfig {
    /// Vitals tick period in milliseconds
    pub vitals_interval_ms: u64,

    /// Mission re-evaluation period in milliseconds
    pub mission_interval_ms: u64,

    pub temperature_unit: TemperatureUnit,

    /// Maximum number of heart-rate readings retained
    pub history_capacity: usize,

    /// Readings present before the first tick
    pub history_seed: Vec<u32>,

    /// Fixed RNG seed; `None` seeds from OS entropy
    pub rng_seed: Option<u64>,

    pub schedule: MissionSchedule,
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            vitals_interval_ms: DEFAULT_VITALS_INTERVAL_MS,
            mission_interval_ms: DEFAULT_MISSION_INTERVAL_MS,
            temperature_unit: TemperatureUnit::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_seed: DEFAULT_HISTORY_SEED.to_vec(),
            rng_seed: None,
            schedule: MissionSchedule::default(),
        }
    }
}

impl DossierConfig {
    pub fn builder() -> DossierConfigBuilder {
        DossierConfigBuilder::new()
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dossier::config::DossierConfig;
    /// use dossier::core::TemperatureUnit;
    ///
    /// let config = DossierConfig::from_json(
    ///     r#"{ "temperature_unit": "celsius", "schedule": { "venue": "CLUB NINE" } }"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
    /// assert_eq!(config.schedule.shift_start_hour, 18);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn vitals_interval(&self) -> Duration {
        Duration::from_millis(self.vitals_interval_ms)
    }

    pub fn mission_interval(&self) -> Duration {
        Duration::from_millis(self.mission_interval_ms)
    }

    /// Check every invariant the monitor relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vitals_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("vitals_interval_ms"));
        }
        if self.mission_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("mission_interval_ms"));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.history_seed.is_empty() {
            return Err(ConfigError::EmptySeed);
        }
        check_hour("shift_start_hour", self.schedule.shift_start_hour)?;
        check_hour("shift_end_hour", self.schedule.shift_end_hour)?;
        Ok(())
    }

    /// Fresh history built from the seed and capacity.
    pub fn initial_history(&self) -> Result<VitalsHistory, ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        VitalsHistory::seeded(&self.history_seed, self.history_capacity)
            .ok_or(ConfigError::EmptySeed)
    }
}

fn check_hour(field: &'static str, hour: u32) -> Result<(), ConfigError> {
    if hour > 23 {
        return Err(ConfigError::InvalidHour { field, hour });
    }
    Ok(())
}
