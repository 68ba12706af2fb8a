//! Recipe duplicate detection and culinary-aware ingredient scaling.
//!
//! - [`similarity`] scores how alike two recipes are and finds duplicates
//!   among a collection.
//! - [`scaling`] scales ingredient amounts for more or fewer servings,
//!   adjusting by ingredient category.
//!
//! Both sides share the record shapes in [`types`].

pub mod amount;
pub mod config;
pub mod duplicate_check;
pub mod error;
pub mod scaling;
pub mod similarity;
pub mod types;

pub use amount::{parse_amount, AmountInput};
pub use config::{ConfigError, DuplicateCheckConfig};
pub use duplicate_check::{
    check_duplicates, DuplicateCheckRequest, DuplicateCheckResponse, DuplicateMatch,
    ExistingRecipe, IngredientInput, InstructionInput, RecipeSummary,
};
pub use error::{AmountError, DuplicateCheckError, ScaleError};
pub use scaling::{
    categorize, format_amount, scale, scale_recipe, CustomAdjustments, IngredientCategory,
    ScaledIngredient, ScalingRule,
};
pub use similarity::{
    check_for_duplicates, find_matches, score_recipes, FinderOptions, PartialRecipe,
    DUPLICATE_THRESHOLD, SIMILAR_THRESHOLD,
};
pub use types::{
    IngredientRecord, InstructionRecord, RecipeMatch, RecipeSnapshot, SimilarityScore,
};
