/// Successor frequency entries: per-window character statistics.
use serde::{Deserialize, Serialize};

/// One observed successor character for a context window.
///
/// `count` is the raw number of times the character followed the window in
/// training data; it only ever goes up. `p` and `cp` stay at zero until the
/// owning table finalizes probabilities. Entries keep first-seen order
/// inside their window's list, which fixes the cumulative sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharFrequency {
    /// The successor character itself.
    pub chr: char,
    /// Occurrence count accumulated during training.
    pub count: u32,
    /// Probability mass: `count / total` over the window's entries.
    pub p: f64,
    /// Running sum of `p` across the window's entries up to this one.
    pub cp: f64,
}

impl CharFrequency {
    /// A fresh entry for a first observation.
    pub fn new(chr: char) -> Self {
        Self {
            chr,
            count: 1,
            p: 0.0,
            cp: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_starts_at_one() {
        let entry = CharFrequency::new('x');
        assert_eq!(entry.chr, 'x');
        assert_eq!(entry.count, 1);
        assert_eq!(entry.p, 0.0);
        assert_eq!(entry.cp, 0.0);
    }
}
