//! Core modeling pipeline: successor statistics, training, and generation.

/// Corpus loading helper for drivers (file to string, `\r` stripped).
pub mod corpus;

/// Per-window successor entry type with count and probability mass.
pub mod frequency;

/// The language model: construction modes, training scan, sampling loop.
pub mod model;

/// Window-to-successors table with cumulative probability finalization.
pub mod table;
