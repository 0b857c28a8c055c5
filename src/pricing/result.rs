use serde::{Deserialize, Serialize};

use crate::models::Ingredient;

/// Simulated unit price of one ingredient at one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePrice {
    pub store_id: String,
    pub unit_price: f64,
}

/// An ingredient with its simulated unit price at every store, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedIngredient {
    pub ingredient: Ingredient,
    pub prices: Vec<StorePrice>,
    pub best_store_id: String,
}

impl PricedIngredient {
    /// Unit price at the given store, if the store was priced.
    pub fn unit_price(&self, store_id: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|p| p.store_id == store_id)
            .map(|p| p.unit_price)
    }

    /// Unit price × quantity at the given store.
    pub fn line_cost(&self, store_id: &str) -> Option<f64> {
        self.unit_price(store_id)
            .map(|price| price * self.ingredient.quantity)
    }

    pub fn is_best_at(&self, store_id: &str) -> bool {
        self.best_store_id == store_id
    }
}

/// Aggregated cost of the whole plan at one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreTotal {
    pub store_id: String,
    pub total_cost: f64,
    pub cost_per_serving: f64,
    pub is_best_deal: bool,
}

/// Full comparison of a meal plan across the store catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub meal_plan_name: String,
    pub servings: u32,
    pub per_ingredient: Vec<PricedIngredient>,
    pub per_store: Vec<StoreTotal>,
    pub best_deal: StoreTotal,
}

impl ComparisonResult {
    /// Total for a store by id.
    pub fn store_total(&self, store_id: &str) -> Option<&StoreTotal> {
        self.per_store.iter().find(|s| s.store_id == store_id)
    }

    /// Savings of the best deal against the most expensive store.
    pub fn max_savings(&self) -> f64 {
        let worst = self
            .per_store
            .iter()
            .map(|s| s.total_cost)
            .fold(self.best_deal.total_cost, f64::max);
        worst - self.best_deal.total_cost
    }
}
