//! Admin drink counter.
//!
//! Tracks how many standard drinks the agent has had, with a log of each
//! drink added, an intoxication label, the total volume consumed and a rough
//! blood-alcohol estimate.
//! The tally lives in memory only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod error;

pub use error::TallyError;

/// Description recorded for every drink added.
pub const STANDARD_DRINK: &str = "0.4L Beer 4%";
pub const STANDARD_VOLUME_LITERS: f64 = 0.4;
pub const STANDARD_ABV_PERCENT: f64 = 4.0;
/// 0.4 L x 4 % x 0.8 g/ml ethanol density
pub const STANDARD_ALCOHOL_GRAMS: f64 = 12.8;

pub const DEFAULT_BODY_WEIGHT_KG: f64 = 77.0;
/// Flat elimination allowance subtracted from the estimate, in percent BAC.
const ELIMINATION_ALLOWANCE: f64 = 0.015;

crate::label_enum! {
    /// Intoxication label derived from the drink count.
    pub enum IntoxicationLevel {
        Sober => "SOBER",
        Tipsy => "TIPSY",
        Buzzed => "BUZZED",
        Wasted => "WASTED",
    }
}

impl IntoxicationLevel {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Sober,
            1..=3 => Self::Tipsy,
            4..=6 => Self::Buzzed,
            _ => Self::Wasted,
        }
    }
}

/// One drink added to the tally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrinkEntry {
    /// When the drink was added
    pub timestamp: DateTime<Utc>,
    /// Human-readable description of the drink
    pub drink_type: String,
    /// Serving size in litres
    pub volume_liters: f64,
    /// Alcohol by volume, in percent
    pub abv_percent: f64,
    /// Grams of ethanol in the serving
    pub alcohol_grams: f64,
}

impl DrinkEntry {
    pub fn standard(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            drink_type: STANDARD_DRINK.to_string(),
            volume_liters: STANDARD_VOLUME_LITERS,
            abv_percent: STANDARD_ABV_PERCENT,
            alcohol_grams: STANDARD_ALCOHOL_GRAMS,
        }
    }
}

/// Running drink count.
///
/// Removing or resetting only changes the count; the drink log keeps every
/// entry that was added.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use dossier::tally::{DrinkTally, IntoxicationLevel};
///
/// let mut tally = DrinkTally::new(Utc::now());
/// tally.add_drink(Utc::now());
/// tally.add_drink(Utc::now());
///
/// assert_eq!(tally.count(), 2);
/// assert_eq!(tally.level(), IntoxicationLevel::Tipsy);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrinkTally {
    count: u32,
    drinks: Vec<DrinkEntry>,
    last_updated: DateTime<Utc>,
}

impl DrinkTally {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            count: 0,
            drinks: Vec::new(),
            last_updated: created_at,
        }
    }

    /// Add one standard drink and return the new count.
    pub fn add_drink(&mut self, at: DateTime<Utc>) -> u32 {
        self.count = self.count.saturating_add(1);
        self.drinks.push(DrinkEntry::standard(at));
        self.last_updated = at;
        debug!(count = self.count, "drink added");
        self.count
    }

    /// Remove one drink and return the new count.
    ///
    /// Removing from an empty tally is rejected with [`TallyError::Empty`]
    /// and leaves `last_updated` untouched, rather than clamping at zero.
    pub fn remove_drink(&mut self, at: DateTime<Utc>) -> Result<u32, TallyError> {
        if self.count == 0 {
            warn!("drink removal rejected, tally is empty");
            return Err(TallyError::Empty);
        }
        self.count -= 1;
        self.last_updated = at;
        debug!(count = self.count, "drink removed");
        Ok(self.count)
    }

    pub fn reset(&mut self, at: DateTime<Utc>) {
        self.count = 0;
        self.last_updated = at;
        debug!("tally reset");
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn drinks(&self) -> &[DrinkEntry] {
        &self.drinks
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn level(&self) -> IntoxicationLevel {
        IntoxicationLevel::from_count(self.count)
    }

    /// Total litres of drink consumed, at the standard serving size.
    pub fn alcohol_volume_liters(&self) -> f64 {
        f64::from(self.count) * STANDARD_VOLUME_LITERS
    }

    /// Simplified blood-alcohol estimate in percent.
    ///
    /// Total grams over body mass, minus a flat elimination allowance,
    /// floored at zero.
    pub fn estimated_bac(&self, body_weight_kg: f64) -> f64 {
        debug_assert!(body_weight_kg > 0.0);
        let grams = f64::from(self.count) * STANDARD_ALCOHOL_GRAMS;
        let bac = grams / (body_weight_kg * 1000.0) * 100.0;
        (bac - ELIMINATION_ALLOWANCE).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_with(count: u32) -> DrinkTally {
        let mut tally = DrinkTally::new(Utc::now());
        for _ in 0..count {
            tally.add_drink(Utc::now());
        }
        tally
    }

    #[test]
    fn new_tally_is_sober() {
        let tally = DrinkTally::new(Utc::now());
        assert_eq!(tally.count(), 0);
        assert!(tally.drinks().is_empty());
        assert_eq!(tally.level(), IntoxicationLevel::Sober);
        assert_eq!(tally.estimated_bac(DEFAULT_BODY_WEIGHT_KG), 0.0);
    }

    #[test]
    fn add_drink_logs_standard_entry() {
        let at = Utc::now();
        let mut tally = DrinkTally::new(at);
        assert_eq!(tally.add_drink(at), 1);

        let entry = &tally.drinks()[0];
        assert_eq!(entry.drink_type, STANDARD_DRINK);
        assert_eq!(entry.alcohol_grams, STANDARD_ALCOHOL_GRAMS);
        assert_eq!(entry.timestamp, at);
        assert_eq!(tally.last_updated(), at);
    }

    #[test]
    fn remove_drink_keeps_log() {
        let mut tally = tally_with(2);
        assert_eq!(tally.remove_drink(Utc::now()), Ok(1));
        assert_eq!(tally.drinks().len(), 2);
    }

    #[test]
    fn remove_from_empty_is_rejected() {
        let mut tally = DrinkTally::new(Utc::now());
        assert_eq!(tally.remove_drink(Utc::now()), Err(TallyError::Empty));
        assert_eq!(tally.count(), 0);
    }

    #[test]
    fn reset_zeroes_count() {
        let mut tally = tally_with(5);
        tally.reset(Utc::now());
        assert_eq!(tally.count(), 0);
        assert_eq!(tally.level(), IntoxicationLevel::Sober);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(IntoxicationLevel::from_count(0), IntoxicationLevel::Sober);
        assert_eq!(IntoxicationLevel::from_count(1), IntoxicationLevel::Tipsy);
        assert_eq!(IntoxicationLevel::from_count(3), IntoxicationLevel::Tipsy);
        assert_eq!(IntoxicationLevel::from_count(4), IntoxicationLevel::Buzzed);
        assert_eq!(IntoxicationLevel::from_count(6), IntoxicationLevel::Buzzed);
        assert_eq!(IntoxicationLevel::from_count(7), IntoxicationLevel::Wasted);
        assert_eq!(IntoxicationLevel::from_count(40), IntoxicationLevel::Wasted);
    }

    #[test]
    fn bac_estimate_subtracts_allowance() {
        let tally = tally_with(1);
        let expected = 12.8 / 77_000.0 * 100.0 - 0.015;
        assert!((tally.estimated_bac(DEFAULT_BODY_WEIGHT_KG) - expected).abs() < 1e-12);

        let tally = tally_with(6);
        assert!(tally.estimated_bac(DEFAULT_BODY_WEIGHT_KG) > 0.08);
    }

    #[test]
    fn alcohol_volume_scales_with_count() {
        assert_eq!(tally_with(0).alcohol_volume_liters(), 0.0);
        assert!((tally_with(3).alcohol_volume_liters() - 1.2).abs() < 1e-12);

        let mut tally = tally_with(3);
        tally.remove_drink(Utc::now()).unwrap();
        assert!((tally.alcohol_volume_liters() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn rejected_removal_keeps_last_updated() {
        let created = Utc::now();
        let mut tally = DrinkTally::new(created);
        assert!(tally.remove_drink(Utc::now()).is_err());
        assert_eq!(tally.last_updated(), created);
    }

    #[test]
    fn bac_is_never_negative_for_light_drinking() {
        let tally = tally_with(1);
        assert_eq!(tally.estimated_bac(200.0), 0.0);
    }

    #[test]
    fn tally_serializes_round_trip() {
        let tally = tally_with(2);
        let json = serde_json::to_string(&tally).unwrap();
        let parsed: DrinkTally = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tally);
    }
}
