//! Dossier: simulated vitals and weekly mission status for an agent dossier
//!
//! Dossier follows a "pure core, imperative shell" layout. The core derives
//! every displayed value with pure functions (random readings come from an
//! injected RNG, mission status from a weekday and hour), while the monitor
//! owns the timers and the two state containers that feed a display.
//!
//! # Core Concepts
//!
//! - **Vitals**: bounded simulated readings via [`generate`](core::generate)
//! - **History**: the last ten heart rates via [`VitalsHistory`]
//! - **Mission**: weekday/hour schedule via [`MissionSchedule`]
//! - **Monitor**: `start`/`stop`/`snapshot` lifecycle via [`DossierMonitor`]
//! - **Tally**: the admin drink counter via [`DrinkTally`]
//!
//! # Example
//!
//! ```rust
//! use chrono::Weekday;
//! use dossier::core::{classify, generate, MissionPhase, TemperatureUnit, VitalsHistory};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use chrono::Utc;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut history = VitalsHistory::default();
//!
//! let sample = generate(&mut rng, TemperatureUnit::Fahrenheit, Utc::now());
//! history.append(sample.heart_rate);
//! assert_eq!(history.latest(), sample.heart_rate);
//!
//! assert_eq!(classify(Weekday::Fri, 12).phase, MissionPhase::Reconnaissance);
//! ```

pub mod config;
pub mod core;
pub mod macros;
pub mod monitor;
pub mod tally;

// Re-export commonly used types
pub use self::config::{ConfigError, DossierConfig, DossierConfigBuilder};
pub use self::core::{MissionPhase, MissionSchedule, MissionStatus, VitalSample, VitalsHistory};
pub use self::monitor::{DisplaySurface, DossierMonitor, DossierSnapshot, MonitorError};
pub use self::tally::{DrinkTally, IntoxicationLevel};
