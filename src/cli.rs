use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MealCost: compare the simulated cost of meal plans across grocery stores.
#[derive(Parser, Debug)]
#[command(name = "meal_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved meal plans JSON file.
    #[arg(short, long, default_value = "meal_plans.json", global = true)]
    pub file: PathBuf,

    /// Store catalog JSON file (defaults to the built-in catalog).
    #[arg(short, long, global = true)]
    pub stores: Option<PathBuf>,

    /// Enable debug logging on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// List saved meal plans.
    #[default]
    List,

    /// Create a new meal plan interactively.
    New,

    /// Compare the cost of a saved meal plan across stores.
    Compare {
        /// Meal plan name (fuzzy matched).
        name: String,

        /// Random seed for reproducible prices.
        #[arg(long)]
        seed: Option<u64>,

        /// Override the plan's serving count (kept on the plan with --save).
        #[arg(long)]
        servings: Option<u32>,

        /// Write the ingredient breakdown to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the full comparison to a JSON file.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Store the best-deal cost on the saved plan.
        #[arg(long)]
        save: bool,
    },

    /// Delete a saved meal plan.
    Remove {
        /// Meal plan name (exact, case-insensitive).
        name: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the active store catalog.
    Stores,
}
