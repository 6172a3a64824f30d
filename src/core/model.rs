/// The language model: construction modes, training scan, weighted
/// sampling, and text generation.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::core::frequency::CharFrequency;
use crate::core::table::ContextTable;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("window length must be at least 1, got {0}")]
    InvalidWindowLength(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returned when sampling is asked for a successor of an empty or missing
/// entry list. Cannot arise for a table built through `train`.
const PLACEHOLDER: char = ' ';

/// A fixed-order character-level Markov model.
///
/// The window length and the entropy mode are fixed at construction.
/// Training scans a corpus once and builds per-window successor
/// distributions; generation extends a seed text one character at a time by
/// weighted sampling over the trailing window's successors, sliding the
/// window forward after each draw.
pub struct LanguageModel {
    window_length: usize,
    table: ContextTable,
    rng: StdRng,
}

impl LanguageModel {
    /// Unseeded mode: draws come from OS entropy, so repeated runs produce
    /// different texts.
    pub fn new(window_length: usize) -> Result<Self, ModelError> {
        Self::with_rng(window_length, StdRng::from_entropy())
    }

    /// Seeded mode: the same seed yields the same draw sequence, so
    /// generation from identical training data is byte-identical. Good for
    /// tests and debugging.
    pub fn with_seed(window_length: usize, seed: u64) -> Result<Self, ModelError> {
        Self::with_rng(window_length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(window_length: usize, rng: StdRng) -> Result<Self, ModelError> {
        if window_length == 0 {
            return Err(ModelError::InvalidWindowLength(window_length));
        }
        Ok(Self {
            window_length,
            table: ContextTable::new(),
            rng,
        })
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Read-only view of the trained table.
    pub fn table(&self) -> &ContextTable {
        &self.table
    }

    /// Scan the corpus and build the successor table.
    ///
    /// Records one observation at every char offset where a full window and
    /// a following character both exist, then finalizes probabilities. An
    /// empty corpus is a no-op, as is one no longer than the window.
    ///
    /// Calling `train` again accumulates counts on top of the existing
    /// table and recomputes probabilities over the merged counts.
    pub fn train(&mut self, corpus: &str) {
        let chars: Vec<char> = corpus.chars().collect();
        if chars.len() <= self.window_length {
            return;
        }
        for i in 0..chars.len() - self.window_length {
            let window: String = chars[i..i + self.window_length].iter().collect();
            let next = chars[i + self.window_length];
            self.table.record(&window, next);
        }
        self.table.finalize_probabilities();
    }

    /// Generate text by repeatedly sampling a successor for the trailing
    /// window of the output.
    ///
    /// A seed text shorter than the window length is returned unchanged.
    /// The loop stops after `target_length` appended characters, or as soon
    /// as the current window has no trained successors; a shorter-than-
    /// requested result is a normal outcome, not an error.
    pub fn generate(&mut self, seed_text: &str, target_length: usize) -> String {
        let seed_chars: Vec<char> = seed_text.chars().collect();
        if seed_chars.len() < self.window_length {
            return seed_text.to_owned();
        }

        let mut output = seed_text.to_owned();
        let mut window: Vec<char> =
            seed_chars[seed_chars.len() - self.window_length..].to_vec();

        for _ in 0..target_length {
            let key: String = window.iter().collect();
            let entries = match self.table.lookup(&key) {
                Some(entries) => entries,
                None => break,
            };
            let r = self.rng.gen::<f64>();
            let next = pick_char(entries, r);
            output.push(next);

            // Slide the window forward
            window.push(next);
            window.remove(0);
        }

        output
    }

    /// Diagnostic dump: one line per window with its ordered
    /// (char, count, p, cp) entries. Window order is unspecified.
    ///
    /// Keys and characters are debug-escaped so windows containing
    /// newlines still occupy a single line.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (window, entries) in self.table.iter() {
            out.push_str(&window.escape_debug().to_string());
            out.push_str(" :");
            for entry in entries {
                out.push_str(&format!(
                    " ({} {} {:.4} {:.4})",
                    entry.chr.escape_debug(),
                    entry.count,
                    entry.p,
                    entry.cp
                ));
            }
            out.push('\n');
        }
        out
    }
}

/// Select a character from an ordered successor list given a uniform draw
/// `r` in [0, 1).
///
/// Returns the first entry whose cumulative probability strictly exceeds
/// `r`, so boundary ties resolve to the earliest entry past the boundary.
/// When rounding leaves no such entry (`r` just under 1.0 and the last `cp`
/// just under it), the last entry wins. An empty list yields a space.
fn pick_char(entries: &[CharFrequency], r: f64) -> char {
    let mut last = PLACEHOLDER;
    for entry in entries {
        last = entry.chr;
        if r < entry.cp {
            return entry.chr;
        }
    }
    last
}
