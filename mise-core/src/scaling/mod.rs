//! Smart ingredient scaling.
//!
//! `category` tags an ingredient by name, `rules` says how each category
//! responds to a bigger or smaller batch, `scaler` applies the rule, and
//! `format` renders the result for a recipe card.

pub mod category;
pub mod format;
pub mod rules;
pub mod scaler;

pub use category::{categorize, IngredientCategory};
pub use format::format_amount;
pub use rules::{all_rules, ScalingRule};
pub use scaler::{
    is_adjustable, linear_scale, round2, scale, scale_ingredient, scale_recipe, scale_with_rule,
    CustomAdjustment, CustomAdjustments, ScaledIngredient,
};
