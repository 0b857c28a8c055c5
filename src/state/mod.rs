mod manager;
mod persistence;

pub use manager::MealPlanStore;
pub use persistence::{load_catalog, load_meal_plans, save_meal_plans};
