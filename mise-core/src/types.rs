//! Record shapes shared by the similarity and scaling engines.
//!
//! Everything here is built fresh per request from caller-supplied data and
//! discarded after scoring or scaling.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ingredient line. An empty `name` means "no name" and is excluded
/// from ingredient comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientRecord {
    /// Storage identity, used only to key custom scaling overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl IngredientRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// One step of a recipe's method. Step numbers are 1-based and contiguous.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstructionRecord {
    pub step_number: u32,
    pub text: String,
}

impl InstructionRecord {
    /// Number a list of step texts from 1.
    pub fn from_steps<I, S>(steps: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        steps
            .into_iter()
            .zip(1..)
            .map(|(text, step_number)| Self {
                step_number,
                text: text.into(),
            })
            .collect()
    }
}

/// A transient view of a recipe as seen by the similarity engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSnapshot {
    /// Identity used to skip the target when it also appears among candidates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    /// Minutes.
    #[serde(default)]
    pub prep_time: Option<u32>,
    /// Minutes.
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
    #[serde(default)]
    pub instructions: Vec<InstructionRecord>,
}

impl RecipeSnapshot {
    /// Prep plus cook time, treating missing values as zero.
    pub fn total_time(&self) -> u64 {
        u64::from(self.prep_time.unwrap_or(0)) + u64::from(self.cook_time.unwrap_or(0))
    }

    /// True when both snapshots carry the same storage identity.
    pub fn same_identity(&self, other: &RecipeSnapshot) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Weighted similarity between two recipes, with each signal kept for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScore {
    pub overall: f64,
    pub title_similarity: f64,
    pub ingredient_similarity: f64,
    pub instruction_similarity: f64,
    pub servings_similarity: f64,
    pub time_similarity: f64,
}

/// A candidate recipe that scored at or above the caller's minimum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    pub recipe: RecipeSnapshot,
    pub score: SimilarityScore,
    pub is_duplicate: bool,
}
