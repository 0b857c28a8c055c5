use serde::{Deserialize, Serialize};

use crate::error::{CostError, Result};
use crate::models::Ingredient;
use crate::pricing::constants::DEFAULT_SERVINGS;
use crate::pricing::result::ComparisonResult;

/// A saved meal plan: named ingredient list plus the number of servings it yields.
///
/// `total_cost` and `cost_per_serving` cache the best deal from the last
/// comparison, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default = "default_servings")]
    pub servings: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_serving: Option<f64>,
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

impl MealPlan {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>, servings: u32) -> Self {
        Self {
            name: name.into(),
            description: None,
            ingredients,
            servings,
            total_cost: None,
            cost_per_serving: None,
        }
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CostError::InvalidInput(
                "meal plan name is empty".to_string(),
            ));
        }
        if self.servings < 1 {
            return Err(CostError::InvalidServings(self.servings));
        }
        if self.ingredients.is_empty() {
            return Err(CostError::EmptyIngredientList);
        }
        for ingredient in &self.ingredients {
            ingredient.validate()?;
        }
        Ok(())
    }

    /// Cache the best deal of a comparison on this plan.
    pub fn record_best_deal(&mut self, result: &ComparisonResult) {
        self.total_cost = Some(round_cents(result.best_deal.total_cost));
        self.cost_per_serving = Some(round_cents(result.best_deal.cost_per_serving));
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> MealPlan {
        MealPlan::new(
            "Beef Tacos",
            vec![
                Ingredient::new("Ground beef", 1.0, "lb"),
                Ingredient::new("Tortillas", 8.0, "pc"),
            ],
            4,
        )
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let mut other = sample_plan();
        other.name = "  BEEF TACOS ".to_string();
        assert_eq!(sample_plan().key(), other.key());
    }

    #[test]
    fn test_validate() {
        assert!(sample_plan().validate().is_ok());

        let mut no_servings = sample_plan();
        no_servings.servings = 0;
        assert!(matches!(
            no_servings.validate(),
            Err(CostError::InvalidServings(0))
        ));

        let mut empty = sample_plan();
        empty.ingredients.clear();
        assert!(matches!(
            empty.validate(),
            Err(CostError::EmptyIngredientList)
        ));
    }

    #[test]
    fn test_deserialize_defaults_servings() {
        let plan: MealPlan = serde_json::from_str(
            r#"{"name": "Soup", "ingredients": [{"name": "Leek", "quantity": 2, "unit": "pc"}]}"#,
        )
        .unwrap();
        assert_eq!(plan.servings, DEFAULT_SERVINGS);
        assert!(plan.total_cost.is_none());
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1.234), 1.23);
        assert_eq!(round_cents(1.235_1), 1.24);
    }
}
