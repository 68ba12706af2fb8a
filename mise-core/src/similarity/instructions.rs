//! Token overlap between two recipes' method text.

use std::collections::HashSet;

use crate::similarity::string::string_similarity;
use crate::types::InstructionRecord;

/// Tokens this short or shorter carry no signal ("to", "in", "10").
const MIN_TOKEN_LEN: usize = 3;

/// Confidence applied when only one side has any usable tokens.
const DEGENERATE_TEXT_WEIGHT: f64 = 0.5;

/// Similarity of two instruction lists in `[0, 1]`.
///
/// Each side's steps are joined and lowercased, then compared as sets of
/// whitespace tokens at least three characters long (Jaccard). When only one
/// side has such tokens the whole strings are compared by edit distance at
/// half weight instead.
pub fn instruction_similarity(first: &[InstructionRecord], second: &[InstructionRecord]) -> f64 {
    match (first.is_empty(), second.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let text1 = joined_text(first);
    let text2 = joined_text(second);

    match (text1.trim().is_empty(), text2.trim().is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let tokens1 = tokens(&text1);
    let tokens2 = tokens(&text2);

    match (tokens1.is_empty(), tokens2.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => {
            string_similarity(&text1, &text2) * DEGENERATE_TEXT_WEIGHT
        }
        (false, false) => {
            let intersection = tokens1.intersection(&tokens2).count();
            let union = tokens1.len() + tokens2.len() - intersection;
            intersection as f64 / union as f64
        }
    }
}

fn joined_text(instructions: &[InstructionRecord]) -> String {
    instructions
        .iter()
        .map(|i| i.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn tokens(text: &str) -> HashSet<&str> {
    text.split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn steps(texts: &[&str]) -> Vec<InstructionRecord> {
        InstructionRecord::from_steps(texts.iter().copied())
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(instruction_similarity(&[], &[]), 1.0);
        assert_eq!(instruction_similarity(&steps(&["Bake it"]), &[]), 0.0);
        assert_eq!(instruction_similarity(&[], &steps(&["Bake it"])), 0.0);
    }

    #[test]
    fn test_blank_text() {
        assert_eq!(instruction_similarity(&steps(&[" "]), &steps(&["", ""])), 1.0);
        assert_eq!(instruction_similarity(&steps(&[" "]), &steps(&["Bake"])), 0.0);
    }

    #[test]
    fn test_only_short_tokens_on_both_sides() {
        assert_eq!(instruction_similarity(&steps(&["do it"]), &steps(&["go on"])), 1.0);
    }

    #[test]
    fn test_one_side_short_tokens_falls_back_to_half_edit_similarity() {
        let a = steps(&["do it"]);
        let b = steps(&["Do it all"]);
        let expected = string_similarity("do it", "do it all") * 0.5;
        assert!(expected > 0.0);
        assert_abs_diff_eq!(instruction_similarity(&a, &b), expected);
    }

    #[test]
    fn test_token_jaccard() {
        let a = steps(&["Whisk the eggs", "Fold in flour"]);
        let b = steps(&["Whisk the EGGS and sugar"]);
        // {whisk, the, eggs, fold, flour} vs {whisk, the, eggs, and, sugar}
        assert_abs_diff_eq!(instruction_similarity(&a, &b), 3.0 / 7.0);
    }

    #[test]
    fn test_token_sets_ignore_repeats_and_step_boundaries() {
        let a = steps(&["Stir, stir, stir well"]);
        let b = steps(&["Stir,", "stir well"]);
        assert_eq!(instruction_similarity(&a, &b), 1.0);
    }
}
