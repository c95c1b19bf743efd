//! Timer-driven dossier monitor.
//!
//! The imperative shell around the pure core. A [`DossierMonitor`] owns the
//! heart-rate history and the current mission status, and drives two
//! independent periodic tasks on the tokio runtime:
//!
//! - a vitals tick (every 3 s by default) that generates a sample, appends it
//!   to the history and pushes it to the [`DisplaySurface`]
//! - a mission tick (hourly by default, plus once at start) that reclassifies
//!   the schedule from a single clock read
//!
//! Each container has exactly one writer. `stop` cancels both tasks and waits
//! for them to finish, so no state changes once it returns.

use crate::config::{ConfigError, DossierConfig};
use crate::core::{
    generate, project, MissionSchedule, MissionStatus, TemperatureUnit, VitalSample,
    VitalsHistory, Waveform,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

pub mod clock;
pub mod error;
pub mod surface;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::MonitorError;
pub use surface::{DisplaySurface, NullSurface};

/// Read-only view of everything the dossier displays.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DossierSnapshot {
    /// Most recent vitals, or the resting readings before the first tick
    pub latest: VitalSample,
    /// Retained heart rates, oldest first
    pub history: VitalsHistory,
    /// Current mission status
    pub mission: MissionStatus,
    /// `None` until the schedule has been evaluated once
    pub mission_updated_at: Option<DateTime<Utc>>,
    /// Number of vitals ticks applied so far
    pub vitals_ticks: u64,
}

impl DossierSnapshot {
    pub fn waveform(&self) -> Waveform {
        project(&self.history)
    }
}

struct DossierState {
    latest: VitalSample,
    history: VitalsHistory,
    mission: MissionStatus,
    mission_updated_at: Option<DateTime<Utc>>,
    vitals_ticks: u64,
    rng: StdRng,
}

/// Handles to the two running tick tasks.
struct Tickers {
    vitals: JoinHandle<()>,
    mission: JoinHandle<()>,
}

/// Everything a tick task needs, cloned into each spawned task.
#[derive(Clone)]
struct TickContext {
    state: Arc<Mutex<DossierState>>,
    clock: Arc<dyn Clock>,
    surface: Arc<dyn DisplaySurface>,
    unit: TemperatureUnit,
    schedule: MissionSchedule,
}

impl TickContext {
    async fn vitals_tick(&self) {
        let captured_at = self.clock.now().with_timezone(&Utc);

        let (sample, history) = {
            let mut state = self.state.lock().await;
            let sample = generate(&mut state.rng, self.unit, captured_at);
            state.history.append(sample.heart_rate);
            state.latest = sample.clone();
            state.vitals_ticks += 1;
            (sample, state.history.clone())
        };

        debug!(
            heart_rate = sample.heart_rate,
            blood_pressure = %sample.blood_pressure(),
            temperature = %sample.temperature_label(),
            oxygen = sample.oxygen_saturation,
            "vitals tick"
        );
        self.surface.render_vitals(&sample, &history);
    }

    async fn mission_tick(&self) {
        let now = self.clock.now();
        let status = self.schedule.classify_at(&now);

        let previous = {
            let mut state = self.state.lock().await;
            state.mission_updated_at = Some(now.with_timezone(&Utc));
            std::mem::replace(&mut state.mission, status.clone())
        };

        if previous == status {
            debug!(phase = %status.phase, "mission status unchanged");
        } else {
            info!(
                from = %previous.phase,
                to = %status.phase,
                cover = %status.cover,
                location = %status.location,
                "mission status changed"
            );
        }
        self.surface.render_mission(&status);
    }
}

/// Owned vitals and mission-status engine.
///
/// Independent instances never share state. Timer tasks are spawned on the
/// ambient tokio runtime, so `start` must be called from within one.
///
/// Tear down with `stop().await`: it waits for both tasks to finish, so no
/// state change or display call happens after it returns. Dropping a running
/// monitor only aborts the tasks; on a multi-thread runtime a tick already
/// executing on another worker may still reach the display.
///
/// # Example
///
/// ```rust
/// use dossier::config::DossierConfig;
/// use dossier::monitor::DossierMonitor;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let monitor = DossierMonitor::new(DossierConfig::default()).unwrap();
/// monitor.start().await.unwrap();
///
/// let snapshot = monitor.snapshot().await;
/// assert!(snapshot.mission_updated_at.is_some());
///
/// monitor.stop().await;
/// assert!(!monitor.is_running().await);
/// # }
/// ```
pub struct DossierMonitor {
    config: DossierConfig,
    context: TickContext,
    tickers: Mutex<Option<Tickers>>,
}

impl DossierMonitor {
    /// Create a stopped monitor using the system clock and no display.
    pub fn new(config: DossierConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let history = config.initial_history()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let created_at = clock.now().with_timezone(&Utc);
        let latest = VitalSample::resting(config.temperature_unit, created_at);

        let state = DossierState {
            latest,
            history,
            mission: MissionStatus::standby(),
            mission_updated_at: None,
            vitals_ticks: 0,
            rng,
        };

        let context = TickContext {
            state: Arc::new(Mutex::new(state)),
            clock,
            surface: Arc::new(NullSurface),
            unit: config.temperature_unit,
            schedule: config.schedule.clone(),
        };

        Ok(Self {
            config,
            context,
            tickers: Mutex::new(None),
        })
    }

    /// Replace the time source.
    ///
    /// Before the first vitals tick, the resting sample is restamped with
    /// the new clock's time.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        if let Some(state) = Arc::get_mut(&mut self.context.state) {
            let state = state.get_mut();
            if state.vitals_ticks == 0 {
                state.latest.captured_at = clock.now().with_timezone(&Utc);
            }
        }
        self.context.clock = clock;
        self
    }

    /// Attach the display that receives every update.
    pub fn with_surface(mut self, surface: Arc<dyn DisplaySurface>) -> Self {
        self.context.surface = surface;
        self
    }

    pub fn config(&self) -> &DossierConfig {
        &self.config
    }

    /// Evaluate the schedule once and start both tick tasks.
    pub async fn start(&self) -> Result<(), MonitorError> {
        let mut tickers = self.tickers.lock().await;
        if tickers.is_some() {
            warn!("start requested while monitor is running");
            return Err(MonitorError::AlreadyRunning);
        }

        self.context.mission_tick().await;

        let vitals_context = self.context.clone();
        let vitals = spawn_ticker(self.config.vitals_interval(), move || {
            let context = vitals_context.clone();
            async move { context.vitals_tick().await }
        });

        let mission_context = self.context.clone();
        let mission = spawn_ticker(self.config.mission_interval(), move || {
            let context = mission_context.clone();
            async move { context.mission_tick().await }
        });

        *tickers = Some(Tickers { vitals, mission });
        info!(
            vitals_interval_ms = self.config.vitals_interval_ms,
            mission_interval_ms = self.config.mission_interval_ms,
            "dossier monitor started"
        );
        Ok(())
    }

    /// Cancel both tick tasks and wait for them to wind down.
    ///
    /// Safe to call repeatedly or on a monitor that never started.
    pub async fn stop(&self) {
        let Some(tickers) = self.tickers.lock().await.take() else {
            return;
        };

        tickers.vitals.abort();
        tickers.mission.abort();
        for handle in [tickers.vitals, tickers.mission] {
            if let Err(err) = handle.await {
                if err.is_panic() {
                    warn!(error = %err, "tick task panicked before stop");
                }
            }
        }
        info!("dossier monitor stopped");
    }

    pub async fn is_running(&self) -> bool {
        self.tickers.lock().await.is_some()
    }

    pub async fn snapshot(&self) -> DossierSnapshot {
        let state = self.context.state.lock().await;
        DossierSnapshot {
            latest: state.latest.clone(),
            history: state.history.clone(),
            mission: state.mission.clone(),
            mission_updated_at: state.mission_updated_at,
            vitals_ticks: state.vitals_ticks,
        }
    }
}

impl Drop for DossierMonitor {
    fn drop(&mut self) {
        if let Some(tickers) = self.tickers.get_mut().take() {
            tickers.vitals.abort();
            tickers.mission.abort();
        }
    }
}

/// Run `tick` every `period`, first firing one full period after spawn.
fn spawn_ticker<F, Fut>(period: Duration, tick: F) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            tick().await;
        }
    })
}
