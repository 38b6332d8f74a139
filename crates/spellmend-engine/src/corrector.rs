// Dictionary-backed corrector
//
// Owns a dictionary and a cost table and answers correction queries. The
// distance computation is pure, so results are memoized per query string:
// misspelling lists tend to repeat words, and a repeated word always maps to
// the same correction.

use std::cell::RefCell;

use hashbrown::HashMap;
use spellmend_core::{Correction, SpellmendError, Word};

use crate::cost::TunedCosts;
use crate::selector::best_match_with;

/// Corrects query words against a fixed, non-empty dictionary.
pub struct Corrector {
    /// Dictionary entries in scan order. Order matters for tie-breaking.
    dictionary: Vec<Word>,
    costs: TunedCosts,
    /// Query string -> correction.
    /// Wrapped in `RefCell` so `correct` can take `&self`.
    cache: RefCell<HashMap<String, Correction>>,
}

impl Corrector {
    /// Create a corrector with the default cost table.
    ///
    /// An empty dictionary is rejected here rather than on the first query.
    pub fn new(dictionary: Vec<Word>) -> Result<Self, SpellmendError> {
        if dictionary.is_empty() {
            return Err(SpellmendError::EmptyDictionary);
        }
        Ok(Self {
            dictionary,
            costs: TunedCosts::default(),
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// Replace the cost table. Clears any memoized results.
    pub fn with_costs(mut self, costs: TunedCosts) -> Self {
        self.costs = costs;
        self.cache.get_mut().clear();
        self
    }

    pub fn costs(&self) -> &TunedCosts {
        &self.costs
    }

    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// Find the closest dictionary entry for `query`.
    pub fn correct(&self, query: &str) -> Result<Correction, SpellmendError> {
        if let Some(hit) = self.cache.borrow().get(query) {
            return Ok(hit.clone());
        }

        let word = Word::from(query);
        let (best, cost) = best_match_with(&self.costs, word.chars(), &self.dictionary)?;
        let correction = Correction::new(query, best.to_string(), cost);

        self.cache
            .borrow_mut()
            .insert(query.to_string(), correction.clone());
        Ok(correction)
    }

    /// Correct every query, preserving input order.
    pub fn correct_all<I, S>(&self, queries: I) -> Result<Vec<Correction>, SpellmendError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        queries
            .into_iter()
            .map(|q| self.correct(q.as_ref()))
            .collect()
    }

    /// Number of memoized queries.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}
