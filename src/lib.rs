//! Charkov: character-level Markov text modeling and generation.
//!
//! Trains a fixed-order character model from a corpus string and extends
//! seed text by weighted random sampling over each trailing window's
//! observed successors. Seeded construction makes generation fully
//! reproducible; unseeded construction draws from OS entropy.

pub mod core;
