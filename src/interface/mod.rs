pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_comparison_csv, write_comparison_json};
pub use prompts::{
    collect_meal_plan, prompt_description, prompt_ingredient, prompt_ingredients,
    prompt_plan_name, prompt_servings, prompt_yes_no,
};
pub use render::{
    display_catalog, display_comparison, display_plan_list, format_currency, format_price_cell,
};
