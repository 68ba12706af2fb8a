//! Per-category scaling rules.

use serde::Serialize;

use crate::scaling::category::IngredientCategory;

/// How one category of ingredient responds to a change in batch size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalingRule {
    pub category: IngredientCategory,
    /// Applied to the multiplied amount.
    pub scaling_factor: f64,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    /// Multiplier beyond which the extra portion scales at half rate.
    pub threshold: Option<f64>,
    pub rationale: &'static str,
}

const fn rule(
    category: IngredientCategory,
    scaling_factor: f64,
    min_amount: Option<f64>,
    threshold: Option<f64>,
    rationale: &'static str,
) -> ScalingRule {
    ScalingRule {
        category,
        scaling_factor,
        min_amount,
        max_amount: None,
        threshold,
        rationale,
    }
}

/// One rule per category, in [`IngredientCategory::ALL`] order.
static RULES: [ScalingRule; 14] = [
    rule(
        IngredientCategory::Spice,
        0.75,
        Some(0.125),
        Some(3.0),
        "Spices intensify in larger batches; scaled at 75% and tapered past 3x",
    ),
    rule(
        IngredientCategory::Herb,
        0.85,
        None,
        None,
        "Herbs are aromatic; scaled at 85% to avoid overpowering",
    ),
    rule(
        IngredientCategory::Salt,
        0.8,
        Some(0.125),
        Some(3.0),
        "Salt is easy to overdo; scaled at 80% and tapered past 3x",
    ),
    rule(
        IngredientCategory::Sugar,
        0.9,
        None,
        None,
        "Sweetness carries in larger batches; scaled at 90%",
    ),
    rule(
        IngredientCategory::Fat,
        0.95,
        None,
        None,
        "Fats scale nearly linearly",
    ),
    rule(
        IngredientCategory::Liquid,
        1.0,
        None,
        None,
        "Liquids scale linearly",
    ),
    rule(
        IngredientCategory::Flour,
        1.0,
        None,
        None,
        "Flour provides structure and scales linearly",
    ),
    rule(
        IngredientCategory::Leavening,
        0.85,
        Some(0.125),
        Some(2.0),
        "Leavening is chemically potent; scaled at 85% and tapered past 2x",
    ),
    rule(
        IngredientCategory::Acid,
        0.85,
        None,
        None,
        "Acidity is noticeable in small amounts; scaled at 85%",
    ),
    rule(
        IngredientCategory::Dairy,
        1.0,
        None,
        None,
        "Dairy scales linearly",
    ),
    rule(
        IngredientCategory::Egg,
        1.0,
        Some(1.0),
        None,
        "Eggs scale linearly but never below one whole egg",
    ),
    rule(
        IngredientCategory::Vegetable,
        1.0,
        None,
        None,
        "Vegetables scale linearly",
    ),
    rule(
        IngredientCategory::Meat,
        1.0,
        None,
        None,
        "Meat scales linearly",
    ),
    rule(
        IngredientCategory::Other,
        1.0,
        None,
        None,
        "Scales linearly with servings",
    ),
];

impl ScalingRule {
    /// The rule for a category. Every category has exactly one.
    pub fn for_category(category: IngredientCategory) -> &'static ScalingRule {
        RULES
            .iter()
            .find(|r| r.category == category)
            .unwrap_or(&RULES[RULES.len() - 1])
    }

    /// Clamp an amount into this rule's bounds.
    pub fn clamp(&self, amount: f64) -> f64 {
        let amount = self.min_amount.map_or(amount, |min| amount.max(min));
        self.max_amount.map_or(amount, |max| amount.min(max))
    }

    /// Whether this rule changes anything compared to plain multiplication.
    pub fn is_linear(&self) -> bool {
        self.scaling_factor == 1.0
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.threshold.is_none()
    }
}

/// All rules in category order.
pub fn all_rules() -> &'static [ScalingRule] {
    &RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_rule_per_category() {
        let categories: Vec<IngredientCategory> = all_rules().iter().map(|r| r.category).collect();
        assert_eq!(categories, IngredientCategory::ALL);
        for category in IngredientCategory::ALL {
            assert_eq!(ScalingRule::for_category(*category).category, *category);
        }
    }

    #[test]
    fn test_linear_categories() {
        for category in [
            IngredientCategory::Liquid,
            IngredientCategory::Flour,
            IngredientCategory::Dairy,
            IngredientCategory::Vegetable,
            IngredientCategory::Meat,
            IngredientCategory::Other,
        ] {
            assert!(ScalingRule::for_category(category).is_linear(), "{category}");
        }
        assert!(!ScalingRule::for_category(IngredientCategory::Egg).is_linear());
        assert!(!ScalingRule::for_category(IngredientCategory::Spice).is_linear());
    }

    #[test]
    fn test_clamp() {
        let egg = ScalingRule::for_category(IngredientCategory::Egg);
        assert_eq!(egg.clamp(0.25), 1.0);
        assert_eq!(egg.clamp(3.0), 3.0);

        let capped = ScalingRule {
            max_amount: Some(2.0),
            ..*egg
        };
        assert_eq!(capped.clamp(5.0), 2.0);
    }
}
