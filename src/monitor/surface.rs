//! Rendering contract between the monitor and whatever draws the dossier.

use crate::core::{MissionStatus, VitalSample, VitalsHistory};

/// Receiver of every state change the monitor produces.
///
/// Calls arrive from the monitor's timer tasks after the state lock has been
/// released. Nothing flows back into the monitor.
pub trait DisplaySurface: Send + Sync {
    /// A vitals tick produced `sample`; `history` already includes it.
    fn render_vitals(&self, sample: &VitalSample, history: &VitalsHistory);

    fn render_mission(&self, status: &MissionStatus);
}

/// Surface that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl DisplaySurface for NullSurface {
    fn render_vitals(&self, _sample: &VitalSample, _history: &VitalsHistory) {}

    fn render_mission(&self, _status: &MissionStatus) {}
}
