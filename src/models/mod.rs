pub mod ingredient;
pub mod meal_plan;
pub mod store;

pub use ingredient::Ingredient;
pub use meal_plan::MealPlan;
pub use store::{Store, StoreCatalog};
