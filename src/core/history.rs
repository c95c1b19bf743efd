//! Bounded heart-rate history.
//!
//! Retains the most recent readings for waveform rendering, evicting the
//! oldest once capacity is exceeded.

use serde::Serialize;

/// Number of readings kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Readings present before the first generator tick.
pub const DEFAULT_HISTORY_SEED: [u32; 5] = [85, 87, 83, 89, 85];

/// Ordered heart-rate readings, oldest first.
///
/// The buffer is built from a non-empty seed and offers no removal, so it
/// always holds between 1 and `capacity` values.
///
/// # Example
///
/// ```rust
/// use dossier::core::VitalsHistory;
///
/// let mut history = VitalsHistory::seeded(&[80, 81], 3).unwrap();
/// history.append(82);
/// history.append(83);
///
/// assert_eq!(history.current(), &[81, 82, 83]);
/// assert_eq!(history.latest(), 83);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VitalsHistory {
    values: Vec<u32>,
    capacity: usize,
}

impl Default for VitalsHistory {
    fn default() -> Self {
        Self {
            values: DEFAULT_HISTORY_SEED.to_vec(),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl VitalsHistory {
    /// Build a history from seed readings.
    ///
    /// Returns `None` when `seed` is empty or `capacity` is zero. A seed
    /// longer than `capacity` keeps only its newest values.
    pub fn seeded(seed: &[u32], capacity: usize) -> Option<Self> {
        if seed.is_empty() || capacity == 0 {
            return None;
        }
        let skip = seed.len().saturating_sub(capacity);
        Some(Self {
            values: seed[skip..].to_vec(),
            capacity,
        })
    }

    /// Push a reading, dropping the oldest when over capacity.
    pub fn append(&mut self, value: u32) {
        self.values.push(value);
        if self.values.len() > self.capacity {
            let excess = self.values.len() - self.capacity;
            self.values.drain(..excess);
        }
        debug_assert!(!self.values.is_empty() && self.values.len() <= self.capacity);
    }

    /// Full retained sequence, oldest first.
    pub fn current(&self) -> &[u32] {
        &self.values
    }

    /// Newest reading.
    pub fn latest(&self) -> u32 {
        self.values[self.values.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
