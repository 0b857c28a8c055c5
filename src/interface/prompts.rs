use dialoguer::{Confirm, Input, Select};

use crate::error::{CostError, Result};
use crate::models::{Ingredient, MealPlan};
use crate::pricing::constants::{DEFAULT_SERVINGS, DEFAULT_UNIT, KNOWN_UNITS};

/// Prompt for the meal plan name.
pub fn prompt_plan_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Meal plan name")
        .interact_text()?;

    let name = input.trim().to_string();
    if name.is_empty() {
        return Err(CostError::InvalidInput("Name cannot be empty".to_string()));
    }
    Ok(name)
}

/// Prompt for an optional free-text description.
pub fn prompt_description() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// Prompt for the number of servings the plan yields.
pub fn prompt_servings() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many servings does this plan make?")
        .default(DEFAULT_SERVINGS.to_string())
        .interact_text()?;

    parse_servings(&input)
}

fn parse_servings(input: &str) -> Result<u32> {
    let servings: u32 = input
        .trim()
        .parse()
        .map_err(|_| CostError::InvalidInput("Invalid number".to_string()))?;

    if servings < 1 {
        return Err(CostError::InvalidServings(servings));
    }
    Ok(servings)
}

fn parse_quantity(input: &str) -> Result<f64> {
    let quantity: f64 = input
        .trim()
        .parse()
        .map_err(|_| CostError::InvalidInput("Invalid number".to_string()))?;

    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(CostError::InvalidInput(
            "Quantity must be greater than 0".to_string(),
        ));
    }
    Ok(quantity)
}

/// Prompt for one ingredient. Returns `None` when the user enters an empty name.
pub fn prompt_ingredient() -> Result<Option<Ingredient>> {
    let name: String = Input::new()
        .with_prompt("Ingredient name (or press Enter to finish)")
        .allow_empty(true)
        .interact_text()?;

    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let quantity = loop {
        let input: String = Input::new()
            .with_prompt(format!("Quantity of {}", name))
            .default("1".to_string())
            .interact_text()?;

        match parse_quantity(&input) {
            Ok(q) => break q,
            Err(e) => println!("{}", e),
        }
    };

    let default_idx = KNOWN_UNITS
        .iter()
        .position(|u| *u == DEFAULT_UNIT)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Unit")
        .items(&KNOWN_UNITS)
        .default(default_idx)
        .interact()?;

    Ok(Some(Ingredient::new(name, quantity, KNOWN_UNITS[selection])))
}

/// Collect ingredients until the user finishes. At least one is required.
pub fn prompt_ingredients() -> Result<Vec<Ingredient>> {
    let mut ingredients = Vec::new();

    loop {
        match prompt_ingredient()? {
            Some(ingredient) => {
                println!("Added: {} {}", ingredient.quantity_label(), ingredient.name);
                ingredients.push(ingredient);
            }
            None if ingredients.is_empty() => {
                println!("A meal plan needs at least one ingredient.");
            }
            None => break,
        }
    }

    Ok(ingredients)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Build a complete meal plan interactively.
pub fn collect_meal_plan() -> Result<MealPlan> {
    let name = prompt_plan_name()?;
    let description = prompt_description()?;
    let servings = prompt_servings()?;
    let ingredients = prompt_ingredients()?;

    let mut plan = MealPlan::new(name, ingredients, servings);
    plan.description = description;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_servings() {
        assert_eq!(parse_servings(" 4 ").unwrap(), 4);
        assert!(matches!(
            parse_servings("0"),
            Err(CostError::InvalidServings(0))
        ));
        assert!(matches!(
            parse_servings("four"),
            Err(CostError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1.5").unwrap(), 1.5);
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("inf").is_err());
    }
}
