//! Scaling commands: scale, categorize.

use anyhow::Result;
use mise_core::scaling::{
    categorize as categorize_name, scale_recipe, CustomAdjustment, CustomAdjustments, ScalingRule,
};
use mise_core::RecipeSnapshot;
use std::path::Path;

use crate::io::{print_json, read_json};

pub fn scale(
    recipe: &Path,
    multiplier: f64,
    adjustments: Option<&Path>,
    json: bool,
) -> Result<()> {
    anyhow::ensure!(
        multiplier.is_finite() && multiplier > 0.0,
        "Multiplier must be a positive number, got {multiplier}"
    );

    let recipe: RecipeSnapshot = read_json(recipe)?;
    let adjustments: CustomAdjustments = match adjustments {
        Some(path) => read_json::<Vec<CustomAdjustment>>(path)?.into_iter().collect(),
        None => CustomAdjustments::new(),
    };

    let scaled = scale_recipe(&recipe.ingredients, multiplier, &adjustments);
    if json {
        return print_json(&scaled);
    }

    println!("{} (x{})", recipe.title, multiplier);
    for ingredient in &scaled {
        let original = ingredient
            .original_amount
            .map(mise_core::format_amount)
            .unwrap_or_else(|| "-".to_string());
        let marker = if ingredient.has_custom_adjustment { "*" } else { " " };
        println!(
            "{:>8}{} {:<8} {:<32} (was {}; {})",
            ingredient.formatted_amount(),
            marker,
            ingredient.unit.as_deref().unwrap_or(""),
            ingredient.name,
            original,
            ingredient.rationale
        );
    }
    Ok(())
}

pub fn categorize(names: &[String]) {
    for name in names {
        let rule = ScalingRule::for_category(categorize_name(name));
        println!(
            "{:<32} {:<10} x{:<5} {}",
            name, rule.category, rule.scaling_factor, rule.rationale
        );
    }
}
