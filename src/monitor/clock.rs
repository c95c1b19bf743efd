//! Wall-clock source for the monitor.

use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Source of the current local time.
///
/// The monitor reads it once per evaluation so weekday and hour always come
/// from the same instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Host system's local time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at one instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn new<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        Self(at.fixed_offset())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc, Weekday};

    #[test]
    fn fixed_clock_returns_same_instant() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 19, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().weekday(), Weekday::Sat);
        assert_eq!(clock.now().hour(), 19);
    }

    #[test]
    fn system_clock_tracks_utc() {
        let before = Utc::now();
        let now = SystemClock.now().with_timezone(&Utc);
        assert!(now >= before);
    }
}
