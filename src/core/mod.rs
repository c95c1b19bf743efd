//! Pure simulation core.
//!
//! This module contains everything the dossier derives without timers or I/O:
//! - Vital-sign generation over an injected random source
//! - The bounded heart-rate history
//! - Weekly mission classification
//! - Waveform projection of the history
//!
//! The monitor module is the imperative shell that drives these on a clock.

mod history;
mod mission;
mod vitals;
mod waveform;

pub use history::{VitalsHistory, DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_SEED};
pub use mission::{
    classify, weekday_from_index, CoverIdentity, MissionPhase, MissionSchedule, MissionStatus,
    DEFAULT_SHIFT_END_HOUR, DEFAULT_SHIFT_START_HOUR, DEFAULT_VENUE, UNKNOWN_LOCATION,
};
pub use vitals::{
    generate, TemperatureUnit, VitalSample, HEART_RATE_MAX, HEART_RATE_MIN, OXYGEN_MAX,
    OXYGEN_MIN,
};
pub use waveform::{project, rate_to_y, Point, Segment, Waveform, VIEW_HEIGHT, VIEW_WIDTH};
