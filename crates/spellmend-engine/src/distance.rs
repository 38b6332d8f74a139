// Weighted edit distance
//
// Levenshtein dynamic programming where every edit is priced by a
// `CostModel` and the price may depend on the cell position. Rows follow
// the query, columns follow the candidate:
//
//   cell(i, j) = min(
//       cell(i-1, j)   + insertion(boundary, query[i-1]),
//       cell(i-1, j-1) + substitution(candidate[j-1], query[i-1]),
//       cell(i, j-1)   + deletion(boundary, candidate[j-1]),
//   )
//
// `boundary` is true when the cell is on the first or last character of
// either word. A deletion from the candidate is therefore priced as a
// boundary edit whenever the query is at its edge, and vice versa.

use spellmend_core::Cost;

use crate::cost::{CostModel, TunedCosts};
use crate::matrix::DistanceMatrix;

/// Distance from `candidate` to `query` under the default spelling-error
/// cost table.
pub fn distance(query: &[char], candidate: &[char]) -> Cost {
    distance_with(&TunedCosts::default(), query, candidate)
}

/// Convenience wrapper over [`distance`] for string slices.
pub fn str_distance(query: &str, candidate: &str) -> Cost {
    let query: Vec<char> = query.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();
    distance(&query, &candidate)
}

/// Distance from `candidate` to `query` under an arbitrary cost model.
pub fn distance_with<M: CostModel + ?Sized>(model: &M, query: &[char], candidate: &[char]) -> Cost {
    distance_matrix(model, query, candidate).total()
}

/// Build and fill the full `(|query|+1) × (|candidate|+1)` table.
///
/// Row 0 accumulates deletions of the candidate, column 0 accumulates
/// insertions of the query; both use the edge rule of their own word only.
pub fn distance_matrix<M: CostModel + ?Sized>(
    model: &M,
    query: &[char],
    candidate: &[char],
) -> DistanceMatrix {
    let n = query.len();
    let m = candidate.len();
    let mut table = DistanceMatrix::new(n + 1, m + 1);

    for i in 1..=n {
        let edge = i == 1 || i == n;
        let cost = model.insertion(edge, query[i - 1]);
        table.set(i, 0, table.get(i - 1, 0).saturating_add(cost));
    }
    for j in 1..=m {
        let edge = j == 1 || j == m;
        let cost = model.deletion(edge, candidate[j - 1]);
        table.set(0, j, table.get(0, j - 1).saturating_add(cost));
    }

    for i in 1..=n {
        let q = query[i - 1];
        for j in 1..=m {
            let c = candidate[j - 1];
            let boundary = i == 1 || i == n || j == 1 || j == m;

            let insert = table.get(i - 1, j).saturating_add(model.insertion(boundary, q));
            let substitute = table.get(i - 1, j - 1).saturating_add(model.substitution(c, q));
            let delete = table.get(i, j - 1).saturating_add(model.deletion(boundary, c));

            table.set(i, j, insert.min(substitute).min(delete));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::UniformCosts;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn identical_words_have_zero_distance() {
        for w in ["", "a", "cat", "receive", "k\u{00E4}vel\u{00F6}"] {
            assert_eq!(str_distance(w, w), 0, "{w}");
        }
    }

    #[test]
    fn interior_vowel_swap() {
        assert_eq!(str_distance("cat", "cet"), 1);
        assert_eq!(str_distance("cet", "cat"), 1);
    }

    #[test]
    fn sibilant_swap_at_edge_is_still_cheap() {
        // Substitution has no boundary surcharge
        assert_eq!(str_distance("sat", "cat"), 1);
    }

    #[test]
    fn empty_query_costs_candidate_deletions() {
        // c: edge 4, a: interior 1, t: edge 4
        assert_eq!(str_distance("", "cat"), 9);
        assert_eq!(str_distance("", "abc"), 9);
        assert_eq!(str_distance("", "a"), 4);
        assert_eq!(str_distance("", "aa"), 8);
    }

    #[test]
    fn empty_candidate_costs_query_insertions() {
        // edge 2, interior 1, edge 2
        assert_eq!(str_distance("cat", ""), 5);
        assert_eq!(str_distance("a", ""), 2);
    }

    #[test]
    fn interior_insertion_into_candidate() {
        assert_eq!(str_distance("caat", "cat"), 1);
        assert_eq!(str_distance("abxd", "abd"), 1);
    }

    #[test]
    fn deleting_interior_c_or_v_is_expensive() {
        let plain = str_distance("abd", "abxd");
        assert_eq!(plain, 1);
        assert_eq!(str_distance("abd", "abcd"), 4);
        assert_eq!(str_distance("abd", "abvd"), 4);
        assert!(str_distance("abd", "abcd") > plain);
        assert!(str_distance("abd", "abvd") > plain);
    }

    #[test]
    fn boundary_is_shared_between_words() {
        // With per-word edge checks this pair would cost 2.
        assert_eq!(str_distance("tset", "test"), 3);
    }

    #[test]
    fn assorted_pairs() {
        assert_eq!(str_distance("caat", "dog"), 7);
        assert_eq!(str_distance("caat", "cow"), 5);
        assert_eq!(str_distance("teh", "the"), 4);
        assert_eq!(str_distance("recieve", "receive"), 2);
        assert_eq!(str_distance("abcde", "abccde"), 3);
        assert_eq!(str_distance("kitten", "sitting"), 7);
    }

    #[test]
    fn case_is_compared_literally() {
        assert_eq!(str_distance("Cat", "cat"), 2);
    }

    #[test]
    fn matrix_edges_accumulate_single_sided_costs() {
        let costs = TunedCosts::default();
        let table = distance_matrix(&costs, &chars("ca"), &chars("cat"));
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cols(), 4);
        assert_eq!(table.row(0), &[0, 4, 5, 9]);
        assert_eq!(table.row(1), &[2, 0, 4, 7]);
        assert_eq!(table.row(2), &[4, 2, 0, 4]);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn uniform_model_matches_levenshtein() {
        assert_eq!(distance_with(&UniformCosts, &chars("kitten"), &chars("sitting")), 3);
        assert_eq!(distance_with(&UniformCosts, &chars(""), &chars("abc")), 3);
        assert_eq!(distance_with(&UniformCosts, &chars("flaw"), &chars("lawn")), 2);
    }

    #[test]
    fn works_through_trait_object() {
        let model: &dyn CostModel = &UniformCosts;
        assert_eq!(distance_with(model, &chars("ab"), &chars("ba")), 2);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let q = chars("speling");
        let c = chars("spelling");
        let first = distance(&q, &c);
        for _ in 0..10 {
            assert_eq!(distance(&q, &c), first);
        }
    }

    #[test]
    fn sample_distances_stay_below_full_rebuild() {
        // Edge pricing along the far row/column means this is not a general
        // bound, but it holds for short words like these.
        let words = ["", "a", "ab", "cat", "vacc", "seize", "abcde"];
        for q in words {
            for c in words {
                let d = str_distance(q, c);
                let rebuild = str_distance("", c) + str_distance(q, "");
                assert!(d <= rebuild, "{q} / {c}: {d} > {rebuild}");
            }
        }
    }
}
