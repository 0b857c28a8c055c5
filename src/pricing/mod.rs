pub mod constants;
pub mod engine;
pub mod result;

pub use constants::*;
pub use engine::{compare_costs, price_ingredient, simulate_unit_price};
pub use result::{ComparisonResult, PricedIngredient, StorePrice, StoreTotal};
