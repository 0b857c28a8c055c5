use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use meal_cost_compare_rs::cli::{Cli, Command};
use meal_cost_compare_rs::error::Result;
use meal_cost_compare_rs::interface::{
    collect_meal_plan, display_catalog, display_comparison, display_plan_list, prompt_yes_no,
    write_comparison_csv, write_comparison_json,
};
use meal_cost_compare_rs::logging::init_logging;
use meal_cost_compare_rs::models::StoreCatalog;
use meal_cost_compare_rs::pricing::compare_costs;
use meal_cost_compare_rs::state::{load_catalog, load_meal_plans, save_meal_plans, MealPlanStore};
use meal_cost_compare_rs::CostError;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::List => cmd_list(&cli.file),
        Command::New => cmd_new(&cli.file),
        Command::Compare {
            name,
            seed,
            servings,
            csv,
            json,
            save,
        } => cmd_compare(
            &cli.file,
            cli.stores.as_deref(),
            &name,
            seed,
            servings,
            csv,
            json,
            save,
        ),
        Command::Remove { name, yes } => cmd_remove(&cli.file, &name, yes),
        Command::Stores => cmd_stores(cli.stores.as_deref()),
    }
}

/// Built-in catalog unless a catalog file was given.
fn resolve_catalog(stores: Option<&Path>) -> Result<StoreCatalog> {
    match stores {
        Some(path) => {
            let catalog = load_catalog(path)?;
            tracing::debug!(path = %path.display(), stores = catalog.len(), "loaded store catalog");
            Ok(catalog)
        }
        None => Ok(StoreCatalog::default()),
    }
}

/// List saved meal plans.
fn cmd_list(file_path: &Path) -> Result<()> {
    let store = MealPlanStore::new(load_meal_plans(file_path)?);
    display_plan_list(&store.all_plans());
    Ok(())
}

/// Build a meal plan interactively and save it.
fn cmd_new(file_path: &Path) -> Result<()> {
    let mut store = MealPlanStore::new(load_meal_plans(file_path)?);

    let plan = collect_meal_plan()?;
    let name = plan.name.clone();
    store.add(plan)?;

    save_meal_plans(file_path, &store.to_plans())?;
    println!("Saved meal plan '{}'.", name);
    println!("Run 'compare \"{}\"' to see prices.", name);
    Ok(())
}

/// Compare a saved plan across the store catalog.
#[allow(clippy::too_many_arguments)]
fn cmd_compare(
    file_path: &Path,
    stores: Option<&Path>,
    name: &str,
    seed: Option<u64>,
    servings: Option<u32>,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let catalog = resolve_catalog(stores)?;
    let mut store = MealPlanStore::new(load_meal_plans(file_path)?);

    let mut plan = store
        .find_closest(name)
        .cloned()
        .ok_or_else(|| CostError::MealPlanNotFound(name.to_string()))?;

    if !plan.name.eq_ignore_ascii_case(name.trim()) {
        println!("Using closest match: {}", plan.name);
    }

    if let Some(servings) = servings {
        plan.servings = servings;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = compare_costs(&plan, &catalog, &mut rng)?;
    display_comparison(&result);

    if let Some(path) = csv {
        write_comparison_csv(&result, &path)?;
        println!("Wrote ingredient breakdown to {:?}", path);
    }

    if let Some(path) = json {
        write_comparison_json(&result, &path)?;
        println!("Wrote comparison to {:?}", path);
    }

    if save {
        if let Some(saved) = store.get_mut(&plan.name) {
            saved.servings = plan.servings;
            saved.record_best_deal(&result);
        }
        save_meal_plans(file_path, &store.to_plans())?;
        println!("Saved best deal on '{}'.", plan.name);
    }

    Ok(())
}

/// Delete a saved meal plan.
fn cmd_remove(file_path: &Path, name: &str, yes: bool) -> Result<()> {
    let mut store = MealPlanStore::new(load_meal_plans(file_path)?);

    if store.get(name).is_none() {
        return Err(CostError::MealPlanNotFound(name.to_string()));
    }

    if !yes && !prompt_yes_no(&format!("Delete meal plan '{}'?", name), false)? {
        println!("Nothing deleted.");
        return Ok(());
    }

    let removed = store.remove(name)?;
    save_meal_plans(file_path, &store.to_plans())?;
    println!("Deleted meal plan '{}'.", removed.name);
    Ok(())
}

/// Show the active store catalog.
fn cmd_stores(stores: Option<&Path>) -> Result<()> {
    let catalog = resolve_catalog(stores)?;
    display_catalog(&catalog);
    Ok(())
}
