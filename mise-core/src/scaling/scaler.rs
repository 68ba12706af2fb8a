//! Category-aware ingredient scaling.
//!
//! Multiplying a recipe does not multiply every ingredient equally: spices,
//! salt and leavening should grow more slowly than flour or water, and a
//! halved recipe still needs a whole egg. Each ingredient is categorized by
//! name and scaled by its category's [`ScalingRule`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScaleError;
use crate::scaling::category::{categorize, IngredientCategory};
use crate::scaling::format::format_amount;
use crate::scaling::rules::ScalingRule;
use crate::types::IngredientRecord;

/// Rate applied to the part of the multiplier beyond a rule's threshold.
const BEYOND_THRESHOLD_RATE: f64 = 0.5;

/// Relative nudge applied before rounding. Decimal halves such as 1.025 are
/// stored slightly below the half, so the product is pushed a few ulps away
/// from zero first.
const ROUNDING_NUDGE: f64 = f64::EPSILON * 4.0;

/// Beyond this magnitude an f64 carries no hundredths to round.
const NO_FRACTION_MAGNITUDE: f64 = 1e15;

/// Round to two decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    if value.abs() >= NO_FRACTION_MAGNITUDE {
        return value;
    }
    let nudged = value + value * ROUNDING_NUDGE;
    (nudged * 100.0).round() / 100.0
}

/// Scale an amount for an ingredient by name.
///
/// `amount × multiplier × factor`, with the portion of the multiplier past the
/// rule's threshold at half rate, then clamped to the rule's bounds and
/// rounded to two decimals. Fails on non-finite input rather than producing
/// a misleading number.
pub fn scale(amount: f64, multiplier: f64, ingredient_name: &str) -> Result<f64, ScaleError> {
    let rule = ScalingRule::for_category(categorize(ingredient_name));
    scale_with_rule(amount, multiplier, rule)
}

/// Scale an amount under a specific rule.
pub fn scale_with_rule(
    amount: f64,
    multiplier: f64,
    rule: &ScalingRule,
) -> Result<f64, ScaleError> {
    check_finite(amount, multiplier)?;

    let factor = rule.scaling_factor;
    let scaled = match rule.threshold {
        Some(threshold) if multiplier > threshold => {
            amount * threshold * factor
                + amount * (multiplier - threshold) * factor * BEYOND_THRESHOLD_RATE
        }
        _ => amount * multiplier * factor,
    };

    check_overflow(round2(rule.clamp(scaled)), amount, multiplier)
}

/// Plain proportional scaling, rounded to two decimals.
pub fn linear_scale(amount: f64, multiplier: f64) -> Result<f64, ScaleError> {
    check_finite(amount, multiplier)?;
    check_overflow(round2(amount * multiplier), amount, multiplier)
}

fn check_finite(amount: f64, multiplier: f64) -> Result<(), ScaleError> {
    if !amount.is_finite() {
        return Err(ScaleError::NonFiniteAmount(amount));
    }
    if !multiplier.is_finite() {
        return Err(ScaleError::NonFiniteMultiplier(multiplier));
    }
    Ok(())
}

fn check_overflow(scaled: f64, amount: f64, multiplier: f64) -> Result<f64, ScaleError> {
    if scaled.is_finite() {
        Ok(scaled)
    } else {
        Err(ScaleError::Overflow { amount, multiplier })
    }
}

/// Every ingredient with a numeric amount can be adjusted by the user.
pub fn is_adjustable(has_amount: bool) -> bool {
    has_amount
}

/// User overrides for scaled amounts, keyed by ingredient and multiplier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomAdjustments {
    amounts: HashMap<(Uuid, i64), f64>,
}

impl CustomAdjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multipliers are keyed at hundredths, so 1.5 and 1.499999 share a slot.
    fn key(ingredient_id: Uuid, multiplier: f64) -> (Uuid, i64) {
        (ingredient_id, (multiplier * 100.0).round() as i64)
    }

    pub fn set(&mut self, ingredient_id: Uuid, multiplier: f64, amount: f64) {
        self.amounts.insert(Self::key(ingredient_id, multiplier), amount);
    }

    pub fn get(&self, ingredient_id: Uuid, multiplier: f64) -> Option<f64> {
        self.amounts.get(&Self::key(ingredient_id, multiplier)).copied()
    }

    pub fn remove(&mut self, ingredient_id: Uuid, multiplier: f64) -> Option<f64> {
        self.amounts.remove(&Self::key(ingredient_id, multiplier))
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// One override as stored or sent by a client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAdjustment {
    pub ingredient_id: Uuid,
    pub multiplier: f64,
    pub amount: f64,
}

impl FromIterator<CustomAdjustment> for CustomAdjustments {
    fn from_iter<I: IntoIterator<Item = CustomAdjustment>>(iter: I) -> Self {
        let mut adjustments = CustomAdjustments::new();
        for a in iter {
            adjustments.set(a.ingredient_id, a.multiplier, a.amount);
        }
        adjustments
    }
}

/// An ingredient after scaling, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    pub name: String,
    pub unit: Option<String>,
    pub category: IngredientCategory,
    pub original_amount: Option<f64>,
    pub scaled_amount: Option<f64>,
    pub custom_amount: Option<f64>,
    pub is_adjustable: bool,
    pub rationale: String,
    pub has_custom_adjustment: bool,
}

impl ScaledIngredient {
    /// Custom override, else scaled amount, else the original, else zero.
    pub fn display_amount(&self) -> f64 {
        self.custom_amount
            .or(self.scaled_amount)
            .or(self.original_amount)
            .unwrap_or(0.0)
    }

    pub fn formatted_amount(&self) -> String {
        format_amount(self.display_amount())
    }
}

/// Scale one ingredient, applying any custom override for this multiplier.
///
/// If the amount cannot be scaled, `scaled_amount` is left empty.
pub fn scale_ingredient(
    ingredient: &IngredientRecord,
    multiplier: f64,
    adjustments: &CustomAdjustments,
) -> ScaledIngredient {
    let category = categorize(&ingredient.name);
    let rule = ScalingRule::for_category(category);

    let (scaled_amount, rationale) = match ingredient.amount {
        Some(amount) => match scale_with_rule(amount, multiplier, rule) {
            Ok(scaled) => (Some(scaled), rule.rationale.to_string()),
            Err(e) => {
                tracing::warn!(
                    ingredient = %ingredient.name,
                    error = %e,
                    "could not scale ingredient"
                );
                (None, "Amount could not be scaled".to_string())
            }
        },
        None => (None, "No amount to scale".to_string()),
    };

    let custom_amount = ingredient.id.and_then(|id| adjustments.get(id, multiplier));

    ScaledIngredient {
        name: ingredient.name.clone(),
        unit: ingredient.unit.clone(),
        category,
        original_amount: ingredient.amount,
        scaled_amount,
        custom_amount,
        is_adjustable: is_adjustable(ingredient.amount.is_some()),
        rationale,
        has_custom_adjustment: custom_amount.is_some(),
    }
}

/// Scale every ingredient of a recipe.
pub fn scale_recipe(
    ingredients: &[IngredientRecord],
    multiplier: f64,
    adjustments: &CustomAdjustments,
) -> Vec<ScaledIngredient> {
    ingredients
        .iter()
        .map(|ingredient| scale_ingredient(ingredient, multiplier, adjustments))
        .collect()
}
