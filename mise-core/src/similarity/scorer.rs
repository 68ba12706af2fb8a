//! Weighted multi-signal recipe similarity.

use crate::similarity::ingredients::ingredient_similarity;
use crate::similarity::instructions::instruction_similarity;
use crate::similarity::numeric::{numeric_proximity, NEUTRAL_SCORE};
use crate::similarity::string::string_similarity;
use crate::types::{RecipeSnapshot, SimilarityScore};

/// Component weights; title and ingredient overlap are the strongest
/// duplicate signals. Sums to 1.0.
pub const TITLE_WEIGHT: f64 = 0.40;
pub const INGREDIENT_WEIGHT: f64 = 0.30;
pub const INSTRUCTION_WEIGHT: f64 = 0.20;
pub const SERVINGS_WEIGHT: f64 = 0.05;
pub const TIME_WEIGHT: f64 = 0.05;

/// Score how alike two recipes are. Pure and deterministic; never fails.
pub fn score_recipes(a: &RecipeSnapshot, b: &RecipeSnapshot) -> SimilarityScore {
    let title_similarity = string_similarity(&a.title, &b.title);
    let ingredient_similarity = ingredient_similarity(&a.ingredients, &b.ingredients);
    let instruction_similarity = instruction_similarity(&a.instructions, &b.instructions);
    let servings_similarity =
        numeric_proximity(a.servings.map(f64::from), b.servings.map(f64::from));
    let time_similarity = time_similarity(a, b);

    SimilarityScore::from_components(
        title_similarity,
        ingredient_similarity,
        instruction_similarity,
        servings_similarity,
        time_similarity,
    )
}

/// Total times are only compared when both recipes have one.
fn time_similarity(a: &RecipeSnapshot, b: &RecipeSnapshot) -> f64 {
    let (total_a, total_b) = (a.total_time(), b.total_time());
    if total_a > 0 && total_b > 0 {
        // Sums of two u32 minute counts are exact in an f64.
        numeric_proximity(Some(total_a as f64), Some(total_b as f64))
    } else {
        NEUTRAL_SCORE
    }
}

impl SimilarityScore {
    /// Build a score whose `overall` is the fixed weighted sum of the components.
    pub fn from_components(
        title_similarity: f64,
        ingredient_similarity: f64,
        instruction_similarity: f64,
        servings_similarity: f64,
        time_similarity: f64,
    ) -> Self {
        let overall = TITLE_WEIGHT * title_similarity
            + INGREDIENT_WEIGHT * ingredient_similarity
            + INSTRUCTION_WEIGHT * instruction_similarity
            + SERVINGS_WEIGHT * servings_similarity
            + TIME_WEIGHT * time_similarity;

        Self {
            overall,
            title_similarity,
            ingredient_similarity,
            instruction_similarity,
            servings_similarity,
            time_similarity,
        }
    }
}
