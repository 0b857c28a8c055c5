use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{CostError, Result};
use crate::models::MealPlan;
use crate::pricing::constants::FUZZY_MATCH_THRESHOLD;

/// In-memory collection of saved meal plans.
pub struct MealPlanStore {
    /// All plans keyed by lowercase name.
    plans: HashMap<String, MealPlan>,
}

impl MealPlanStore {
    /// Create a store from a list of plans. Later duplicates replace earlier ones.
    pub fn new(plans: Vec<MealPlan>) -> Self {
        let mut map = HashMap::new();
        for plan in plans {
            map.insert(plan.key(), plan);
        }
        Self { plans: map }
    }

    /// Get a plan by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&MealPlan> {
        self.plans.get(&name.trim().to_lowercase())
    }

    /// Get a mutable reference to a plan by name (case-insensitive).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut MealPlan> {
        self.plans.get_mut(&name.trim().to_lowercase())
    }

    /// Add a validated plan. Fails if a plan with the same name exists.
    pub fn add(&mut self, plan: MealPlan) -> Result<()> {
        plan.validate()?;
        let key = plan.key();
        if self.plans.contains_key(&key) {
            return Err(CostError::DuplicateMealPlan(plan.name));
        }
        tracing::info!(meal_plan = %plan.name, "added meal plan");
        self.plans.insert(key, plan);
        Ok(())
    }

    /// Remove a plan by name, returning it.
    pub fn remove(&mut self, name: &str) -> Result<MealPlan> {
        let removed = self
            .plans
            .remove(&name.trim().to_lowercase())
            .ok_or_else(|| CostError::MealPlanNotFound(name.to_string()))?;
        tracing::info!(meal_plan = %removed.name, "removed meal plan");
        Ok(removed)
    }

    /// Resolve a name: exact (case-insensitive) match first, then the closest
    /// fuzzy match above `FUZZY_MATCH_THRESHOLD`.
    pub fn find_closest(&self, query: &str) -> Option<&MealPlan> {
        if let Some(plan) = self.get(query) {
            return Some(plan);
        }

        let query = query.trim().to_lowercase();
        self.plans
            .iter()
            .map(|(key, plan)| (plan, jaro_winkler(key, &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // Equal scores: prefer the alphabetically first name.
                    .then_with(|| b.0.key().cmp(&a.0.key()))
            })
            .map(|(plan, _)| plan)
    }

    /// All plans sorted by name.
    pub fn all_plans(&self) -> Vec<&MealPlan> {
        let mut plans: Vec<&MealPlan> = self.plans.values().collect();
        plans.sort_by_key(|p| p.key());
        plans
    }

    /// Plan names sorted alphabetically.
    pub fn names(&self) -> Vec<String> {
        self.all_plans().into_iter().map(|p| p.name.clone()).collect()
    }

    /// Convert state to a list of plans for JSON serialization.
    pub fn to_plans(&self) -> Vec<MealPlan> {
        self.all_plans().into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
