//! Weighted edit distance engine for spelling correction.
//!
//! # Architecture
//!
//! - [`cost`] -- Cost models: the tuned spelling-error table and a uniform baseline
//! - [`matrix`] -- Row-major dynamic-programming table
//! - [`distance`] -- The distance engine itself
//! - [`selector`] -- Exhaustive best-match scan over a dictionary
//! - [`corrector`] -- Dictionary owner that answers (and memoizes) queries

pub mod corrector;
pub mod cost;
pub mod distance;
pub mod matrix;
pub mod selector;

pub use corrector::Corrector;
pub use cost::{CostModel, TunedCosts, UniformCosts};
pub use distance::{distance, distance_matrix, distance_with, str_distance};
pub use matrix::DistanceMatrix;
pub use selector::{best_match, best_match_with};

pub use spellmend_core::{Correction, Cost, SpellmendError, Word};
