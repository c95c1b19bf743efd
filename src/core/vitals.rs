//! Simulated vital-sign readings.
//!
//! Generation is a pure function of a random source and a timestamp. Callers
//! own any state the sample feeds into.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Resting heart rate the simulation oscillates around.
pub const HEART_RATE_BASE: f64 = 85.0;
/// Maximum deviation from [`HEART_RATE_BASE`] before clamping.
pub const HEART_RATE_SPREAD: f64 = 10.0;
/// Lowest heart rate a sample can report.
pub const HEART_RATE_MIN: u32 = 75;
/// Highest heart rate a sample can report.
pub const HEART_RATE_MAX: u32 = 95;

/// Lowest oxygen saturation a sample can report, in percent.
pub const OXYGEN_MIN: u32 = 95;
/// Highest oxygen saturation a sample can report, in percent.
pub const OXYGEN_MAX: u32 = 99;

/// Unit the simulated body temperature is reported in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Inclusive band every generated temperature falls in.
    pub fn band(self) -> (f64, f64) {
        match self {
            Self::Fahrenheit => (98.0, 100.0),
            Self::Celsius => (36.5, 38.0),
        }
    }

    /// Temperature shown before the first tick.
    pub fn resting(self) -> f64 {
        match self {
            Self::Fahrenheit => 98.6,
            Self::Celsius => 37.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }
}

/// One immutable set of vital-sign readings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalSample {
    /// Beats per minute, always within [`HEART_RATE_MIN`]..=[`HEART_RATE_MAX`]
    pub heart_rate: u32,
    /// Systolic blood pressure, mmHg
    pub systolic: u32,
    /// Diastolic blood pressure, mmHg
    pub diastolic: u32,
    /// Body temperature rounded to one decimal place
    pub temperature: f64,
    /// Unit `temperature` is expressed in
    pub temperature_unit: TemperatureUnit,
    /// Percent, always within [`OXYGEN_MIN`]..=[`OXYGEN_MAX`]
    pub oxygen_saturation: u32,
    /// When the readings were generated
    pub captured_at: DateTime<Utc>,
}

impl VitalSample {
    /// Readings displayed before the generator has ticked.
    pub fn resting(unit: TemperatureUnit, captured_at: DateTime<Utc>) -> Self {
        Self {
            heart_rate: HEART_RATE_BASE as u32,
            systolic: 120,
            diastolic: 80,
            temperature: unit.resting(),
            temperature_unit: unit,
            oxygen_saturation: 98,
            captured_at,
        }
    }

    /// Heart rate formatted for the dossier, e.g. `"85 BPM"`.
    pub fn heart_rate_label(&self) -> String {
        format!("{} BPM", self.heart_rate)
    }

    /// Blood pressure formatted as `"systolic/diastolic"`.
    pub fn blood_pressure(&self) -> String {
        format!("{}/{}", self.systolic, self.diastolic)
    }

    pub fn temperature_label(&self) -> String {
        format!("{:.1}{}", self.temperature, self.temperature_unit.symbol())
    }

    pub fn oxygen_label(&self) -> String {
        format!("{}%", self.oxygen_saturation)
    }
}

/// Produce one simulated sample from `rng`.
///
/// Never fails; every field is bounded arithmetic over the random source.
/// Inject a seeded RNG to make the output reproducible.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use dossier::core::{generate, TemperatureUnit};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let sample = generate(&mut rng, TemperatureUnit::Fahrenheit, Utc::now());
/// assert!((75..=95).contains(&sample.heart_rate));
/// assert!((95..=99).contains(&sample.oxygen_saturation));
/// ```
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    unit: TemperatureUnit,
    captured_at: DateTime<Utc>,
) -> VitalSample {
    let variation = rng.gen_range(-HEART_RATE_SPREAD..HEART_RATE_SPREAD);
    let heart_rate =
        ((HEART_RATE_BASE + variation).round() as u32).clamp(HEART_RATE_MIN, HEART_RATE_MAX);

    let systolic = (110.0 + rng.gen_range(0.0..20.0_f64)).round() as u32;
    let diastolic = (70.0 + rng.gen_range(0.0..15.0_f64)).round() as u32;

    let (low, high) = unit.band();
    let temperature = round_tenth(low + rng.gen_range(0.0..(high - low)));

    let oxygen_saturation = (95.0 + rng.gen_range(0.0..4.0_f64)).round() as u32;

    VitalSample {
        heart_rate,
        systolic,
        diastolic,
        temperature,
        temperature_unit: unit,
        oxygen_saturation,
        captured_at,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ten_thousand_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for unit in [TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius] {
            let (low, high) = unit.band();
            for _ in 0..10_000 {
                let sample = generate(&mut rng, unit, Utc::now());
                assert!((HEART_RATE_MIN..=HEART_RATE_MAX).contains(&sample.heart_rate));
                assert!((OXYGEN_MIN..=OXYGEN_MAX).contains(&sample.oxygen_saturation));
                assert!((110..=130).contains(&sample.systolic));
                assert!((70..=85).contains(&sample.diastolic));
                assert!(sample.temperature >= low && sample.temperature <= high);
                assert_eq!(sample.temperature_unit, unit);
            }
        }
    }

    #[test]
    fn same_seed_yields_same_sample() {
        let at = Utc::now();
        let a = generate(&mut StdRng::seed_from_u64(9), TemperatureUnit::Celsius, at);
        let b = generate(&mut StdRng::seed_from_u64(9), TemperatureUnit::Celsius, at);
        assert_eq!(a, b);
    }

    #[test]
    fn temperature_has_one_decimal() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let sample = generate(&mut rng, TemperatureUnit::Fahrenheit, Utc::now());
            let scaled = sample.temperature * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn resting_sample_matches_initial_display() {
        let sample = VitalSample::resting(TemperatureUnit::Fahrenheit, Utc::now());
        assert_eq!(sample.heart_rate_label(), "85 BPM");
        assert_eq!(sample.blood_pressure(), "120/80");
        assert_eq!(sample.temperature_label(), "98.6°F");
        assert_eq!(sample.oxygen_label(), "98%");
    }

    #[test]
    fn celsius_label_uses_celsius_symbol() {
        let sample = VitalSample::resting(TemperatureUnit::Celsius, Utc::now());
        assert_eq!(sample.temperature_label(), "37.0°C");
    }

    #[test]
    fn temperature_unit_serializes_lowercase() {
        let json = serde_json::to_string(&TemperatureUnit::Celsius).unwrap();
        assert_eq!(json, "\"celsius\"");
    }
}
