// Best-match selection over a dictionary
//
// Exhaustive, in-order scan. The running best is replaced whenever a
// candidate costs less than *or equal to* it, so among equally close
// entries the last one in dictionary order wins.

use spellmend_core::{Cost, SpellmendError};

use crate::cost::{CostModel, TunedCosts};
use crate::distance::distance_with;

/// Find the dictionary entry closest to `query` under the default cost table.
///
/// Returns the winning entry and its distance. Fails with
/// [`SpellmendError::EmptyDictionary`] when there is nothing to scan.
pub fn best_match<'d, W: AsRef<[char]>>(
    query: &[char],
    dictionary: &'d [W],
) -> Result<(&'d W, Cost), SpellmendError> {
    best_match_with(&TunedCosts::default(), query, dictionary)
}

/// Find the dictionary entry closest to `query` under `model`.
pub fn best_match_with<'d, M, W>(
    model: &M,
    query: &[char],
    dictionary: &'d [W],
) -> Result<(&'d W, Cost), SpellmendError>
where
    M: CostModel + ?Sized,
    W: AsRef<[char]>,
{
    let (first, rest) = dictionary
        .split_first()
        .ok_or(SpellmendError::EmptyDictionary)?;

    let mut best = first;
    let mut best_cost = distance_with(model, query, first.as_ref());
    let mut best_index = 0;

    for (offset, candidate) in rest.iter().enumerate() {
        let cost = distance_with(model, query, candidate.as_ref());
        if cost <= best_cost {
            best = candidate;
            best_cost = cost;
            best_index = offset + 1;
            log::trace!("new best at entry {best_index} with cost {cost}");
        }
    }

    log::debug!(
        "scanned {} entries, picked entry {best_index} with cost {best_cost}",
        dictionary.len()
    );
    Ok((best, best_cost))
}
