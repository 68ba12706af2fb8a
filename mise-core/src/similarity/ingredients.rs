//! Fuzzy overlap between two ingredient lists.

use crate::similarity::string::string_similarity;
use crate::types::IngredientRecord;

/// Minimum name similarity for two ingredients to count as the same one.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Jaccard-style overlap of two ingredient lists in `[0, 1]`.
///
/// Names are normalized and blank names dropped. Each ingredient in `first`,
/// in order, claims the most similar unclaimed ingredient in `second` if that
/// similarity exceeds [`FUZZY_MATCH_THRESHOLD`]. The result is
/// `matches / (|first| + |second| - matches)`.
///
/// The matching is greedy and order-dependent on purpose: the duplicate and
/// similar thresholds are calibrated against it, so it must not be replaced
/// with an optimal assignment.
pub fn ingredient_similarity(first: &[IngredientRecord], second: &[IngredientRecord]) -> f64 {
    let first = normalized_names(first);
    let second = normalized_names(second);

    match (first.is_empty(), second.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let mut claimed = vec![false; second.len()];
    let mut matches = 0usize;

    for name in &first {
        let mut best: Option<(usize, f64)> = None;
        for (idx, candidate) in second.iter().enumerate() {
            if claimed[idx] {
                continue;
            }
            let similarity = string_similarity(name, candidate);
            // Strictly greater keeps the earliest candidate on ties.
            let better = match best {
                Some((_, best_sim)) => similarity > best_sim,
                None => true,
            };
            if better {
                best = Some((idx, similarity));
            }
        }

        if let Some((idx, similarity)) = best {
            if similarity > FUZZY_MATCH_THRESHOLD {
                claimed[idx] = true;
                matches += 1;
            }
        }
    }

    let union = first.len() + second.len() - matches;
    matches as f64 / union as f64
}

/// Lowercase, strip punctuation, collapse whitespace, and drop blank names.
fn normalized_names(ingredients: &[IngredientRecord]) -> Vec<String> {
    ingredients
        .iter()
        .map(|i| normalize_name(&i.name))
        .filter(|name| !name.is_empty())
        .collect()
}

pub(crate) fn normalize_name(name: &str) -> String {
    let stripped: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn list(names: &[&str]) -> Vec<IngredientRecord> {
        names.iter().map(|n| IngredientRecord::new(*n)).collect()
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  All-Purpose   Flour "), "allpurpose flour");
        assert_eq!(normalize_name("Eggs, beaten"), "eggs beaten");
        assert_eq!(normalize_name("!!!"), "");
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(ingredient_similarity(&[], &[]), 1.0);
        assert_eq!(ingredient_similarity(&list(&["salt"]), &[]), 0.0);
        assert_eq!(ingredient_similarity(&[], &list(&["salt"])), 0.0);
    }

    #[test]
    fn test_blank_names_dropped_before_empty_checks() {
        assert_eq!(ingredient_similarity(&list(&["", "--"]), &list(&["  "])), 1.0);
        assert_eq!(ingredient_similarity(&list(&["", "salt"]), &list(&[""])), 0.0);
        assert_eq!(ingredient_similarity(&list(&["", "salt"]), &list(&["salt"])), 1.0);
    }

    #[test]
    fn test_reflexive() {
        let lists = [
            list(&["flour", "sugar", "eggs"]),
            list(&["salt", "salt"]),
            list(&["Butter", "", "butter milk"]),
        ];
        for l in &lists {
            assert_eq!(ingredient_similarity(l, l), 1.0);
        }
    }

    #[test]
    fn test_fuzzy_names_match() {
        let a = list(&["all-purpose flour", "granulated sugar"]);
        let b = list(&["all purpose flour", "granulated sugars"]);
        assert_eq!(ingredient_similarity(&a, &b), 1.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // "egg" vs "eggs" is 0.75, below the acceptance threshold
        assert_eq!(ingredient_similarity(&list(&["egg"]), &list(&["eggs"])), 0.0);
        // "abcde" vs "abcdx" is exactly 0.8, which is not enough
        assert_eq!(ingredient_similarity(&list(&["abcde"]), &list(&["abcdx"])), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_jaccard() {
        let a = list(&["flour", "sugar", "butter"]);
        let b = list(&["flour", "sugar", "eggs", "milk"]);
        // 2 matches, union 3 + 4 - 2 = 5
        assert_abs_diff_eq!(ingredient_similarity(&a, &b), 0.4);
    }

    #[test]
    fn test_each_candidate_claimed_once() {
        let a = list(&["salt", "salt"]);
        let b = list(&["salt"]);
        // 1 match, union 2 + 1 - 1 = 2
        assert_abs_diff_eq!(ingredient_similarity(&a, &b), 0.5);
    }

    #[test]
    fn test_greedy_order_dependence() {
        let x = "aaaaaaaaaaaaaaaaaaaa";
        let y = "bbbaaaaaaaaaaaaaaaaa";
        let p = "baaaaaaaaaaaaaaaaaaa"; // x: 0.95, y: 0.90
        let q = "aaaaaaaaaaaaaaaaaccc"; // x: 0.85, y: 0.70
        let second = list(&[x, y]);

        // p claims x first, leaving q nothing above the threshold
        assert_abs_diff_eq!(ingredient_similarity(&list(&[p, q]), &second), 1.0 / 3.0);
        // q claims x first, p still finds y
        assert_eq!(ingredient_similarity(&list(&[q, p]), &second), 1.0);
    }
}
