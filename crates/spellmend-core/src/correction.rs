// Per-query match result

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Cost;

/// The dictionary entry chosen for a query word, with its distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The word that was looked up.
    pub query: String,
    /// The closest dictionary entry.
    pub suggestion: String,
    /// Weighted edit distance between `query` and `suggestion`.
    pub cost: Cost,
}

impl Correction {
    pub fn new(query: impl Into<String>, suggestion: impl Into<String>, cost: Cost) -> Self {
        Self {
            query: query.into(),
            suggestion: suggestion.into(),
            cost,
        }
    }
}

/// Renders the `<query> --> <suggestion>` line used in suggestion files.
impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.query, self.suggestion)
    }
}
