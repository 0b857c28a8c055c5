use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{CostError, Result};
use crate::models::{MealPlan, Store, StoreCatalog};

/// Load meal plans from a JSON file.
///
/// A missing file is an empty collection. Deduplicates by lowercase name
/// (last occurrence wins).
pub fn load_meal_plans<P: AsRef<Path>>(path: P) -> Result<Vec<MealPlan>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no meal plan file yet");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let plans: Vec<MealPlan> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, MealPlan> = HashMap::new();
    for plan in plans {
        seen.insert(plan.key(), plan);
    }

    let mut deduped: Vec<MealPlan> = seen.into_values().collect();
    deduped.sort_by_key(|p| p.key());
    tracing::debug!(path = %path.display(), count = deduped.len(), "loaded meal plans");
    Ok(deduped)
}

/// Save meal plans to a JSON file, deduplicated by lowercase name.
pub fn save_meal_plans<P: AsRef<Path>>(path: P, plans: &[MealPlan]) -> Result<()> {
    let mut seen: HashMap<String, &MealPlan> = HashMap::new();
    for plan in plans {
        seen.insert(plan.key(), plan);
    }

    let mut deduped: Vec<&MealPlan> = seen.into_values().collect();
    deduped.sort_by_key(|p| p.key());

    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path.as_ref(), json)?;
    tracing::info!(path = %path.as_ref().display(), count = deduped.len(), "saved meal plans");
    Ok(())
}

/// Load a store catalog from a JSON array of stores, validating every entry.
///
/// An empty array is rejected here rather than at comparison time.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<StoreCatalog> {
    let content = fs::read_to_string(path)?;
    let stores: Vec<Store> = serde_json::from_str(&content)?;
    if stores.is_empty() {
        return Err(CostError::EmptyCatalog);
    }
    StoreCatalog::new(stores)
}
