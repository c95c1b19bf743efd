//! Heartbeat waveform projection.
//!
//! Maps the retained heart-rate readings onto a 100x20 view box as a
//! polyline plus a pulse marker at the newest reading.

use super::history::VitalsHistory;
use serde::Serialize;

pub const VIEW_WIDTH: f64 = 100.0;
pub const VIEW_HEIGHT: f64 = 20.0;

/// Heart rate drawn on the bottom edge of the view box.
const FLOOR_RATE: f64 = 70.0;
/// Heart-rate range spanning the full view height.
const RATE_SPAN: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal position, 0 at the oldest reading
    pub x: f64,
    /// Vertical position, 0 at the top of the view box
    pub y: f64,
}

/// Line between two consecutive readings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    /// Older reading
    pub from: Point,
    /// Newer reading
    pub to: Point,
    /// Set on the segment ending at the newest reading
    pub emphasized: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Waveform {
    /// Lines between consecutive readings, oldest first
    pub segments: Vec<Segment>,
    /// Marker drawn at the newest reading
    pub pulse: Point,
}

/// Vertical position for a heart rate; higher rates sit closer to the top.
pub fn rate_to_y(rate: u32) -> f64 {
    VIEW_HEIGHT - (f64::from(rate) - FLOOR_RATE) / RATE_SPAN * VIEW_HEIGHT
}

/// Project `history` onto the view box.
///
/// Readings are spread evenly across the width, oldest at `x = 0` and newest
/// at `x = 100`. A single reading sits at the right edge with no segments.
///
/// # Example
///
/// ```rust
/// use dossier::core::{project, VitalsHistory};
///
/// let history = VitalsHistory::seeded(&[70, 100], 10).unwrap();
/// let waveform = project(&history);
///
/// assert_eq!(waveform.segments.len(), 1);
/// assert_eq!(waveform.segments[0].from.y, 20.0);
/// assert_eq!(waveform.pulse.x, 100.0);
/// assert_eq!(waveform.pulse.y, 0.0);
/// ```
pub fn project(history: &VitalsHistory) -> Waveform {
    let values = history.current();
    let last = values.len().saturating_sub(1);

    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(index, &rate)| Point {
            x: index_to_x(index, last),
            y: rate_to_y(rate),
        })
        .collect();

    let segments = points
        .windows(2)
        .enumerate()
        .map(|(index, pair)| Segment {
            from: pair[0],
            to: pair[1],
            emphasized: index + 1 == last,
        })
        .collect();

    Waveform {
        segments,
        pulse: Point {
            x: VIEW_WIDTH,
            y: rate_to_y(history.latest()),
        },
    }
}

fn index_to_x(index: usize, last: usize) -> f64 {
    if last == 0 {
        return VIEW_WIDTH;
    }
    index as f64 / last as f64 * VIEW_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_to_y_spans_view_height() {
        assert_eq!(rate_to_y(70), 20.0);
        assert_eq!(rate_to_y(85), 10.0);
        assert_eq!(rate_to_y(100), 0.0);
    }

    #[test]
    fn default_history_projects_four_segments() {
        let waveform = project(&VitalsHistory::default());
        assert_eq!(waveform.segments.len(), 4);
        assert_eq!(waveform.segments[0].from.x, 0.0);
        assert_eq!(waveform.segments[0].to.x, 25.0);
        assert_eq!(waveform.segments[3].to.x, 100.0);
    }

    #[test]
    fn only_newest_segment_is_emphasized() {
        let waveform = project(&VitalsHistory::default());
        let emphasized: Vec<bool> = waveform.segments.iter().map(|s| s.emphasized).collect();
        assert_eq!(emphasized, vec![false, false, false, true]);
    }

    #[test]
    fn segments_connect_end_to_start() {
        let waveform = project(&VitalsHistory::default());
        for pair in waveform.segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn single_reading_has_no_segments_and_finite_pulse() {
        let history = VitalsHistory::seeded(&[88], 10).unwrap();
        let waveform = project(&history);
        assert!(waveform.segments.is_empty());
        assert_eq!(waveform.pulse.x, VIEW_WIDTH);
        assert!(waveform.pulse.y.is_finite());
    }

    #[test]
    fn pulse_tracks_latest_reading() {
        let mut history = VitalsHistory::default();
        history.append(95);
        let waveform = project(&history);
        assert_eq!(waveform.pulse.y, rate_to_y(95));
        assert_eq!(waveform.segments.last().unwrap().to.y, rate_to_y(95));
    }
}
