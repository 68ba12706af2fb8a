mod duplicates;
mod io;
mod scale;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "mise")]
#[command(about = "Recipe duplicate detection and smart scaling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score how alike two recipes are
    Compare {
        /// First recipe (JSON snapshot)
        a: PathBuf,
        /// Second recipe (JSON snapshot)
        b: PathBuf,
    },
    /// List recipes similar to a target, best first
    Matches {
        /// Target recipe (JSON snapshot)
        #[arg(long)]
        target: PathBuf,
        /// Recipes to search (JSON array of snapshots)
        #[arg(long)]
        recipes: PathBuf,
        /// Minimum overall score (default: MISE_SIMILAR_THRESHOLD or 0.60)
        #[arg(long)]
        min_score: Option<f64>,
        /// Keep recipes with the same id as the target
        #[arg(long)]
        include_target: bool,
    },
    /// Check a new recipe against existing ones before saving it
    CheckDuplicates {
        /// Recipe being submitted (duplicate-check request JSON)
        #[arg(long)]
        candidate: PathBuf,
        /// Existing recipes (JSON array)
        #[arg(long)]
        recipes: PathBuf,
    },
    /// Scale a recipe's ingredients
    Scale {
        /// Recipe (JSON snapshot)
        #[arg(long)]
        recipe: PathBuf,
        /// Batch multiplier, e.g. 2 for a double batch
        #[arg(long)]
        multiplier: f64,
        /// Custom amounts (JSON array of {ingredientId, multiplier, amount})
        #[arg(long)]
        adjustments: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the scaling category and rule for ingredient names
    Categorize {
        /// Ingredient names
        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// Console logging to stderr, filtered by RUST_LOG.
fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { a, b } => {
            duplicates::compare(&a, &b)?;
        }
        Commands::Matches {
            target,
            recipes,
            min_score,
            include_target,
        } => {
            duplicates::matches(&target, &recipes, min_score, include_target)?;
        }
        Commands::CheckDuplicates { candidate, recipes } => {
            duplicates::check(&candidate, &recipes)?;
        }
        Commands::Scale {
            recipe,
            multiplier,
            adjustments,
            json,
        } => {
            scale::scale(&recipe, multiplier, adjustments.as_deref(), json)?;
        }
        Commands::Categorize { names } => {
            scale::categorize(&names);
        }
    }

    Ok(())
}
