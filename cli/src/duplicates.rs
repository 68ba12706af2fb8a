//! Similarity commands: compare, matches, check-duplicates.

use anyhow::{Context, Result};
use mise_core::similarity::{find_matches, score_recipes, FinderOptions};
use mise_core::{
    check_duplicates, DuplicateCheckConfig, DuplicateCheckRequest, ExistingRecipe, RecipeSnapshot,
};
use std::path::Path;

use crate::io::{print_json, read_json};

pub fn compare(a: &Path, b: &Path) -> Result<()> {
    let a: RecipeSnapshot = read_json(a)?;
    let b: RecipeSnapshot = read_json(b)?;
    print_json(&score_recipes(&a, &b))
}

pub fn matches(
    target: &Path,
    recipes: &Path,
    min_score: Option<f64>,
    include_target: bool,
) -> Result<()> {
    let config = DuplicateCheckConfig::from_env().context("Invalid configuration")?;
    let target: RecipeSnapshot = read_json(target)?;
    let recipes: Vec<RecipeSnapshot> = read_json(recipes)?;

    let options = FinderOptions {
        include_target,
        min_score: min_score.unwrap_or(config.similar_threshold),
    };
    let found = find_matches(&target, &recipes, options);
    tracing::info!("{} of {} recipes matched", found.len(), recipes.len());
    print_json(&found)
}

pub fn check(candidate: &Path, recipes: &Path) -> Result<()> {
    let config = DuplicateCheckConfig::from_env().context("Invalid configuration")?;
    let request: DuplicateCheckRequest = read_json(candidate)?;
    let existing: Vec<ExistingRecipe> = read_json(recipes)?;

    let response = check_duplicates(&request, &existing, &config)?;
    tracing::info!(
        "{} duplicates among {} recipes checked",
        response.matches.len(),
        response.total_checked
    );
    print_json(&response)
}
