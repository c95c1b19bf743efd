//! Builder API for creating dossier configuration.

use crate::config::{ConfigError, DossierConfig};
use crate::core::{MissionSchedule, TemperatureUnit};
use std::time::Duration;

/// Fluent builder for [`DossierConfig`].
///
/// Starts from the defaults; `build` validates the result.
///
/// # Example
///
/// ```rust
/// use dossier::config::DossierConfigBuilder;
/// use dossier::core::TemperatureUnit;
/// use std::time::Duration;
///
/// let config = DossierConfigBuilder::new()
///     .vitals_interval(Duration::from_secs(1))
///     .temperature_unit(TemperatureUnit::Celsius)
///     .shift_hours(20, 3)
///     .venue("HARBOUR BAR")
///     .rng_seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.vitals_interval(), Duration::from_secs(1));
/// assert_eq!(config.schedule.venue, "HARBOUR BAR");
/// ```
pub struct DossierConfigBuilder {
    config: DossierConfig,
}

impl DossierConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DossierConfig::default(),
        }
    }

    /// Set the vitals tick period
    pub fn vitals_interval(mut self, interval: Duration) -> Self {
        self.config.vitals_interval_ms = duration_ms(interval);
        self
    }

    /// Set the mission re-evaluation period
    pub fn mission_interval(mut self, interval: Duration) -> Self {
        self.config.mission_interval_ms = duration_ms(interval);
        self
    }

    pub fn temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.config.temperature_unit = unit;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set the readings the history starts with
    pub fn history_seed(mut self, seed: impl Into<Vec<u32>>) -> Self {
        self.config.history_seed = seed.into();
        self
    }

    /// Make vitals generation reproducible
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    /// Set the bartending shift start (Saturday) and end (Sunday) hours
    pub fn shift_hours(mut self, start: u32, end: u32) -> Self {
        self.config.schedule.shift_start_hour = start;
        self.config.schedule.shift_end_hour = end;
        self
    }

    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.config.schedule.venue = venue.into();
        self
    }

    pub fn schedule(mut self, schedule: MissionSchedule) -> Self {
        self.config.schedule = schedule;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<DossierConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DossierConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn duration_ms(interval: Duration) -> u64 {
    u64::try_from(interval.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_config_defaults() {
        let built = DossierConfigBuilder::new().build().unwrap();
        assert_eq!(built, DossierConfig::default());
    }

    #[test]
    fn builder_rejects_zero_interval() {
        let result = DossierConfigBuilder::new()
            .vitals_interval(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(ConfigError::ZeroInterval(_))));
    }

    #[test]
    fn builder_rejects_invalid_shift_hour() {
        let result = DossierConfigBuilder::new().shift_hours(24, 4).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHour { hour: 24, .. })
        ));
    }

    #[test]
    fn builder_sets_history_options() {
        let config = DossierConfigBuilder::new()
            .history_capacity(4)
            .history_seed([80, 82])
            .build()
            .unwrap();
        assert_eq!(config.history_capacity, 4);
        assert_eq!(config.history_seed, vec![80, 82]);
    }

    #[test]
    fn sub_millisecond_interval_rounds_to_zero_and_fails() {
        let result = DossierConfigBuilder::new()
            .mission_interval(Duration::from_micros(10))
            .build();
        assert!(matches!(result, Err(ConfigError::ZeroInterval(_))));
    }
}
