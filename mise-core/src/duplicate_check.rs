//! Duplicate checking for a recipe that is about to be saved.
//!
//! Converts the loosely-typed request a client submits and the rows already
//! in storage into snapshots, runs the duplicate finder, and shapes the
//! result for the response body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::amount::AmountInput;
use crate::config::DuplicateCheckConfig;
use crate::error::DuplicateCheckError;
use crate::similarity::{
    is_duplicate, rank_candidates, FinderOptions, PartialRecipe, DUPLICATE_THRESHOLD,
};
use crate::types::{IngredientRecord, InstructionRecord, RecipeSnapshot, SimilarityScore};

/// An ingredient line as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientInput {
    pub ingredient: String,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A step as submitted by a client: a bare string or `{"instruction": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InstructionInput {
    Text(String),
    Step { instruction: String },
}

impl InstructionInput {
    pub fn text(&self) -> &str {
        match self {
            InstructionInput::Text(text) => text,
            InstructionInput::Step { instruction } => instruction,
        }
    }
}

/// The recipe a client wants to check before saving.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientInput>>,
    #[serde(default)]
    pub instructions: Option<Vec<InstructionInput>>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
}

impl DuplicateCheckRequest {
    /// Build the partial recipe the finder compares with. Amounts that do not
    /// parse are dropped; they play no part in similarity.
    pub fn to_partial(&self) -> PartialRecipe {
        let ingredients = self.ingredients.as_ref().map(|inputs| {
            inputs
                .iter()
                .map(|input| IngredientRecord {
                    id: None,
                    name: input.ingredient.clone(),
                    amount: input.amount.as_ref().and_then(|a| match a.to_f64() {
                        Ok(value) => Some(value),
                        Err(e) => {
                            tracing::debug!(
                                ingredient = %input.ingredient,
                                error = %e,
                                "dropping unparseable amount"
                            );
                            None
                        }
                    }),
                    unit: input.unit.clone(),
                    notes: input.notes.clone(),
                })
                .collect()
        });

        let instructions = self.instructions.as_ref().map(|steps| {
            InstructionRecord::from_steps(steps.iter().map(|s| s.text().to_string()))
        });

        PartialRecipe {
            title: self.title.clone(),
            description: self.description.clone(),
            servings: self.servings,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            ingredients,
            instructions,
        }
    }
}

/// A recipe already in storage, with its ingredient and instruction rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExistingRecipe {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
    #[serde(default)]
    pub instructions: Vec<InstructionRecord>,
}

impl ExistingRecipe {
    pub fn to_snapshot(&self) -> RecipeSnapshot {
        let mut instructions = self.instructions.clone();
        instructions.sort_by_key(|i| i.step_number);

        RecipeSnapshot {
            id: Some(self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            servings: self.servings,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            ingredients: self.ingredients.clone(),
            instructions,
        }
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The parts of a matched recipe a client needs to link to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateMatch {
    pub recipe: RecipeSummary,
    pub score: SimilarityScore,
    pub is_duplicate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckResponse {
    pub matches: Vec<DuplicateMatch>,
    pub total_checked: usize,
}

/// Check a submitted recipe against the caller's existing recipes.
///
/// The title is required. At most `config.max_candidates` existing recipes
/// are compared, in the order given.
pub fn check_duplicates(
    request: &DuplicateCheckRequest,
    existing: &[ExistingRecipe],
    config: &DuplicateCheckConfig,
) -> Result<DuplicateCheckResponse, DuplicateCheckError> {
    let has_title = matches!(request.title.as_deref(), Some(t) if !t.trim().is_empty());
    if !has_title {
        return Err(DuplicateCheckError::MissingTitle);
    }

    if existing.len() > config.max_candidates {
        tracing::debug!(
            existing = existing.len(),
            max_candidates = config.max_candidates,
            "capping duplicate check candidates"
        );
    }
    let existing = &existing[..existing.len().min(config.max_candidates)];

    let snapshots: Vec<RecipeSnapshot> =
        existing.iter().map(ExistingRecipe::to_snapshot).collect();
    let options = FinderOptions {
        include_target: false,
        min_score: DUPLICATE_THRESHOLD,
    };

    // Indices, not ids, tie a match to its row; storage may repeat an id.
    let matches = rank_candidates(&request.to_partial().to_snapshot(), &snapshots, options)
        .into_iter()
        .map(|(index, score)| DuplicateMatch {
            recipe: existing[index].summary(),
            score,
            is_duplicate: is_duplicate(score.overall),
        })
        .collect();

    Ok(DuplicateCheckResponse {
        matches,
        total_checked: existing.len(),
    })
}
