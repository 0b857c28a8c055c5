pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod state;

pub use error::{CostError, Result};
pub use models::{Ingredient, MealPlan, Store, StoreCatalog};
pub use pricing::{compare_costs, price_ingredient, ComparisonResult};
