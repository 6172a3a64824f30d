/// Context table: maps each window to its ordered successor statistics.
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::frequency::CharFrequency;

/// Mapping from fixed-length windows to the characters observed to follow
/// them in training data.
///
/// Each window owns a `Vec` of [`CharFrequency`] entries in first-seen
/// order. Cumulative probabilities are computed over that order, so after
/// finalization every window's `cp` sequence is non-decreasing and its last
/// entry lands on 1.0 up to float error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextTable {
    windows: FxHashMap<String, Vec<CharFrequency>>,
}

impl ContextTable {
    pub fn new() -> Self {
        Self {
            windows: FxHashMap::default(),
        }
    }

    /// Record one (window, successor) observation.
    ///
    /// Creates the window's entry list on first sight; an already-seen
    /// successor gets its count bumped, a new one is appended so first-seen
    /// order is preserved.
    pub fn record(&mut self, window: &str, next: char) {
        let entries = self.windows.entry(window.to_owned()).or_default();
        if let Some(entry) = entries.iter_mut().find(|e| e.chr == next) {
            entry.count += 1;
        } else {
            entries.push(CharFrequency::new(next));
        }
    }

    /// Convert counts into `p` and `cp` for every window.
    ///
    /// Windows are independent, so the pass order does not matter. Counts
    /// are left untouched; re-running after further recording recomputes
    /// the distributions over the accumulated counts.
    pub fn finalize_probabilities(&mut self) {
        for entries in self.windows.values_mut() {
            finalize_entries(entries);
        }
    }

    /// The successor entries for a window, or `None` if the window never
    /// occurred in training. A miss is a normal outcome, not an error.
    pub fn lookup(&self, window: &str) -> Option<&[CharFrequency]> {
        self.windows.get(window).map(Vec::as_slice)
    }

    /// Number of distinct windows seen in training.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Total number of distinct (window, successor) transitions.
    pub fn transition_count(&self) -> usize {
        self.windows.values().map(Vec::len).sum()
    }

    /// Iterate over (window, entries) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CharFrequency])> {
        self.windows.iter().map(|(w, e)| (w.as_str(), e.as_slice()))
    }
}

/// Finalize a single window's entry list in place.
///
/// A zero total leaves the list untouched; it cannot arise from `record`,
/// which always adds at least one count.
fn finalize_entries(entries: &mut [CharFrequency]) {
    let total: u32 = entries.iter().map(|e| e.count).sum();
    if total == 0 {
        return;
    }
    let mut cum = 0.0;
    for entry in entries.iter_mut() {
        entry.p = f64::from(entry.count) / f64::from(total);
        cum += entry.p;
        entry.cp = cum;
    }
}
