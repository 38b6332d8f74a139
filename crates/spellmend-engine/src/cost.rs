// Edit cost models
//
// The distance engine asks a `CostModel` for the price of every single
// character edit. `TunedCosts` carries the spelling-error table (cheap vowel
// and sibilant swaps, expensive edits at word edges, expensive deletion of
// 'c' and 'v'); `UniformCosts` is plain Levenshtein.

use serde::{Deserialize, Serialize};
use spellmend_core::Cost;

/// Prices for single-character edits.
///
/// `boundary` is decided by the engine per matrix cell: it is `true` when the
/// cell sits on the first or last character of *either* word, regardless of
/// which word the edited character belongs to.
pub trait CostModel {
    /// Cost of aligning candidate character `from` with query character `to`.
    fn substitution(&self, from: char, to: char) -> Cost;

    /// Cost of inserting query character `ch` into the candidate.
    fn insertion(&self, boundary: bool, ch: char) -> Cost;

    /// Cost of deleting candidate character `ch`.
    fn deletion(&self, boundary: bool, ch: char) -> Cost;
}

impl<M: CostModel + ?Sized> CostModel for &M {
    fn substitution(&self, from: char, to: char) -> Cost {
        (**self).substitution(from, to)
    }

    fn insertion(&self, boundary: bool, ch: char) -> Cost {
        (**self).insertion(boundary, ch)
    }

    fn deletion(&self, boundary: bool, ch: char) -> Cost {
        (**self).deletion(boundary, ch)
    }
}

// =========================================================================
// TunedCosts
// =========================================================================

/// Spelling-error cost table.
///
/// | Edit | Condition | Default |
/// |---|---|---|
/// | substitute | same character | 0 |
/// | substitute | `a`/`e` or `s`/`c`, either direction | 1 |
/// | substitute | otherwise | 2 |
/// | insert | boundary | 2 |
/// | insert | interior | 1 |
/// | delete | boundary | 4 |
/// | delete | interior `c` or `v` | 4 |
/// | delete | interior, otherwise | 1 |
///
/// The table is data so it can be loaded from a JSON cost profile. Fields
/// missing from a profile keep their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TunedCosts {
    /// Substitution between two different characters not listed below.
    pub substitution: Cost,
    /// Substitution between the two characters of a cheap pair.
    pub cheap_substitution: Cost,
    /// Unordered character pairs priced at `cheap_substitution`.
    pub cheap_substitution_pairs: Vec<[char; 2]>,
    pub boundary_insertion: Cost,
    pub interior_insertion: Cost,
    pub boundary_deletion: Cost,
    pub interior_deletion: Cost,
    /// Interior deletion price for `heavy_deletion_chars`.
    pub heavy_deletion: Cost,
    /// Characters that are usually correct where they appear.
    pub heavy_deletion_chars: Vec<char>,
}

impl Default for TunedCosts {
    fn default() -> Self {
        Self {
            substitution: 2,
            cheap_substitution: 1,
            cheap_substitution_pairs: vec![['a', 'e'], ['s', 'c']],
            boundary_insertion: 2,
            interior_insertion: 1,
            boundary_deletion: 4,
            interior_deletion: 1,
            heavy_deletion: 4,
            heavy_deletion_chars: vec!['c', 'v'],
        }
    }
}

impl TunedCosts {
    /// Parse a JSON cost profile.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    fn is_cheap_pair(&self, x: char, y: char) -> bool {
        self.cheap_substitution_pairs
            .iter()
            .any(|&[a, b]| (a == x && b == y) || (a == y && b == x))
    }
}

impl CostModel for TunedCosts {
    fn substitution(&self, from: char, to: char) -> Cost {
        if from == to {
            0
        } else if self.is_cheap_pair(from, to) {
            self.cheap_substitution
        } else {
            self.substitution
        }
    }

    fn insertion(&self, boundary: bool, _ch: char) -> Cost {
        if boundary {
            self.boundary_insertion
        } else {
            self.interior_insertion
        }
    }

    fn deletion(&self, boundary: bool, ch: char) -> Cost {
        if boundary {
            self.boundary_deletion
        } else if self.heavy_deletion_chars.contains(&ch) {
            self.heavy_deletion
        } else {
            self.interior_deletion
        }
    }
}

// =========================================================================
// UniformCosts
// =========================================================================

/// Classic Levenshtein pricing: every edit costs 1, matches cost 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCosts;

impl CostModel for UniformCosts {
    fn substitution(&self, from: char, to: char) -> Cost {
        Cost::from(from != to)
    }

    fn insertion(&self, _boundary: bool, _ch: char) -> Cost {
        1
    }

    fn deletion(&self, _boundary: bool, _ch: char) -> Cost {
        1
    }
}
