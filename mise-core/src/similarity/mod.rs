//! Recipe similarity and duplicate detection.
//!
//! Leaf scorers (`string`, `numeric`) feed the list matchers (`ingredients`,
//! `instructions`), which the `scorer` combines into a weighted
//! [`SimilarityScore`](crate::types::SimilarityScore). The `finder` ranks a
//! candidate collection with it.

pub mod finder;
pub mod ingredients;
pub mod instructions;
pub mod numeric;
pub mod scorer;
pub mod string;

pub use finder::{
    check_for_duplicates, find_matches, is_duplicate, rank_candidates, FinderOptions,
    PartialRecipe, DUPLICATE_THRESHOLD, SIMILAR_THRESHOLD,
};
pub use ingredients::{ingredient_similarity, FUZZY_MATCH_THRESHOLD};
pub use instructions::instruction_similarity;
pub use numeric::numeric_proximity;
pub use scorer::score_recipes;
pub use string::string_similarity;
