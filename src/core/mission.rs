//! Weekly mission schedule.
//!
//! The mission phase is a pure function of the local weekday and hour. The
//! Saturday evening bartending shift runs past midnight into Sunday morning.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Location reported whenever the agent is not on shift.
pub const UNKNOWN_LOCATION: &str = "UNKNOWN";

pub const DEFAULT_SHIFT_START_HOUR: u32 = 18;
pub const DEFAULT_SHIFT_END_HOUR: u32 = 4;
pub const DEFAULT_VENUE: &str = "THE VELVET LOUNGE";

crate::label_enum! {
    /// Narrative phase of the agent's week.
    pub enum MissionPhase {
        Reconnaissance => "RECONNAISSANCE",
        Bartending => "BARTENDING",
        Preparation => "PREPARATION",
        Debriefing => "DEBRIEFING",
        Training => "TRAINING",
        Standby => "STANDBY",
    }
}

crate::label_enum! {
    /// Identity the agent operates under.
    pub enum CoverIdentity {
        Civilian => "CIVILIAN",
        Bartender => "BARTENDER",
    }
}

/// Derived mission state. Always recomputed as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionStatus {
    /// Phase of the week
    pub phase: MissionPhase,
    /// Identity in use during this phase
    pub cover: CoverIdentity,
    /// Venue name while on shift, otherwise [`UNKNOWN_LOCATION`]
    pub location: String,
}

impl MissionStatus {
    /// Status shown before the schedule has been evaluated.
    pub fn standby() -> Self {
        Self::off_shift(MissionPhase::Standby)
    }

    fn off_shift(phase: MissionPhase) -> Self {
        Self {
            phase,
            cover: CoverIdentity::Civilian,
            location: UNKNOWN_LOCATION.to_string(),
        }
    }

    fn on_shift(venue: &str) -> Self {
        Self {
            phase: MissionPhase::Bartending,
            cover: CoverIdentity::Bartender,
            location: venue.to_string(),
        }
    }
}

/// Venue-specific schedule parameters.
///
/// The bartending shift covers Saturday from `shift_start_hour` onwards and
/// Sunday before `shift_end_hour`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionSchedule {
    /// Saturday hour (0..=23) the bartending shift begins
    pub shift_start_hour: u32,
    /// Sunday hour (0..=23) the shift has ended by
    pub shift_end_hour: u32,
    /// Location reported while on shift
    pub venue: String,
}

impl Default for MissionSchedule {
    fn default() -> Self {
        Self {
            shift_start_hour: DEFAULT_SHIFT_START_HOUR,
            shift_end_hour: DEFAULT_SHIFT_END_HOUR,
            venue: DEFAULT_VENUE.to_string(),
        }
    }
}

impl MissionSchedule {
    /// Classify a weekday and hour (0..=23).
    ///
    /// Rows are checked in order and the first match wins: Friday is
    /// reconnaissance, the Saturday night shift (including its Sunday
    /// carry-over) is bartending, the rest of Saturday is preparation, the
    /// rest of Sunday is debriefing, and Monday through Thursday is training.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Weekday;
    /// use dossier::core::{MissionPhase, MissionSchedule};
    ///
    /// let schedule = MissionSchedule::default();
    /// assert_eq!(schedule.classify(Weekday::Sat, 19).phase, MissionPhase::Bartending);
    /// assert_eq!(schedule.classify(Weekday::Sun, 2).phase, MissionPhase::Bartending);
    /// assert_eq!(schedule.classify(Weekday::Sun, 10).phase, MissionPhase::Debriefing);
    /// ```
    pub fn classify(&self, weekday: Weekday, hour: u32) -> MissionStatus {
        debug_assert!(hour < 24, "hour out of range: {hour}");

        match weekday {
            Weekday::Fri => MissionStatus::off_shift(MissionPhase::Reconnaissance),
            Weekday::Sat if hour >= self.shift_start_hour => MissionStatus::on_shift(&self.venue),
            Weekday::Sun if hour < self.shift_end_hour => MissionStatus::on_shift(&self.venue),
            Weekday::Sat => MissionStatus::off_shift(MissionPhase::Preparation),
            Weekday::Sun => MissionStatus::off_shift(MissionPhase::Debriefing),
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => {
                MissionStatus::off_shift(MissionPhase::Training)
            }
        }
    }

    /// Classify a single timestamp in its own time zone.
    ///
    /// Weekday and hour come from the same value, so an evaluation straddling
    /// midnight cannot pair one day's weekday with the next day's hour.
    pub fn classify_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> MissionStatus {
        self.classify(at.weekday(), at.hour())
    }
}

/// Classify with the default schedule.
pub fn classify(weekday: Weekday, hour: u32) -> MissionStatus {
    MissionSchedule::default().classify(weekday, hour)
}

/// Map `0 = Sunday .. 6 = Saturday` to a [`Weekday`].
pub fn weekday_from_index(day: u32) -> Option<Weekday> {
    match day {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
