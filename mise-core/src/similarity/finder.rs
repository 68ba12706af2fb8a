//! Ranking a collection of recipes against a target.

use serde::{Deserialize, Serialize};

use crate::similarity::scorer::score_recipes;
use crate::types::{
    IngredientRecord, InstructionRecord, RecipeMatch, RecipeSnapshot, SimilarityScore,
};

/// Overall score at or above which two recipes are the same recipe.
pub const DUPLICATE_THRESHOLD: f64 = 0.85;

/// Overall score at or above which two recipes are worth surfacing as related.
pub const SIMILAR_THRESHOLD: f64 = 0.60;

/// Options for [`find_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinderOptions {
    /// Keep candidates that share the target's identity.
    pub include_target: bool,
    /// Minimum overall score for a candidate to be listed.
    pub min_score: f64,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            include_target: false,
            min_score: SIMILAR_THRESHOLD,
        }
    }
}

/// A recipe as typed into a form: any field may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRecipe {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientRecord>>,
    #[serde(default)]
    pub instructions: Option<Vec<InstructionRecord>>,
}

impl PartialRecipe {
    /// Fill the gaps: missing lists become empty, missing scalars stay unset.
    pub fn to_snapshot(&self) -> RecipeSnapshot {
        RecipeSnapshot {
            id: None,
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone(),
            servings: self.servings,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            ingredients: self.ingredients.clone().unwrap_or_default(),
            instructions: self.instructions.clone().unwrap_or_default(),
        }
    }
}

/// Whether an overall score classifies a pair as duplicates.
pub fn is_duplicate(overall: f64) -> bool {
    overall >= DUPLICATE_THRESHOLD
}

/// Score every candidate against `target` and return those at or above
/// `options.min_score`, best first.
///
/// Candidates sharing the target's identity are skipped unless
/// `options.include_target` is set. Ties keep candidate order.
pub fn find_matches(
    target: &RecipeSnapshot,
    candidates: &[RecipeSnapshot],
    options: FinderOptions,
) -> Vec<RecipeMatch> {
    rank_candidates(target, candidates, options)
        .into_iter()
        .map(|(index, score)| RecipeMatch {
            recipe: candidates[index].clone(),
            score,
            is_duplicate: is_duplicate(score.overall),
        })
        .collect()
}

/// Like [`find_matches`], but yields each match as its index into
/// `candidates` with its score, so callers can map back to their own rows.
pub fn rank_candidates(
    target: &RecipeSnapshot,
    candidates: &[RecipeSnapshot],
    options: FinderOptions,
) -> Vec<(usize, SimilarityScore)> {
    let mut ranked: Vec<(usize, SimilarityScore)> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| options.include_target || !candidate.same_identity(target))
        .filter_map(|(index, candidate)| {
            let score = score_recipes(target, candidate);
            (score.overall >= options.min_score).then_some((index, score))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.overall.total_cmp(&a.1.overall));

    tracing::debug!(
        candidates = candidates.len(),
        matches = ranked.len(),
        min_score = options.min_score,
        "scored recipe candidates"
    );
    ranked
}

/// Find existing recipes that duplicate a draft. Only duplicates are
/// returned; merely similar recipes are left out.
pub fn check_for_duplicates(
    partial: &PartialRecipe,
    candidates: &[RecipeSnapshot],
) -> Vec<RecipeMatch> {
    find_matches(
        &partial.to_snapshot(),
        candidates,
        FinderOptions {
            include_target: false,
            min_score: DUPLICATE_THRESHOLD,
        },
    )
}
