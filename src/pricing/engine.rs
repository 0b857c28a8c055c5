use rand::Rng;

use crate::error::{CostError, Result};
use crate::models::{Ingredient, MealPlan, Store, StoreCatalog};
use crate::pricing::result::{ComparisonResult, PricedIngredient, StorePrice, StoreTotal};

/// Simulated unit price for a store given one uniform draw in [0, 1).
///
/// `base × (1 + (2·draw − 1) × variation)`. Positive prices pass through
/// untouched; a non-positive one (only possible at `variation == 1`) is clamped
/// to the band minimum, or the smallest positive `f64` when that is zero.
pub fn simulate_unit_price(store: &Store, draw: f64) -> f64 {
    let noise = (draw * 2.0 - 1.0) * store.variation;
    let price = store.base_price * (1.0 + noise);
    if price > 0.0 {
        price
    } else {
        store.price_floor().max(f64::MIN_POSITIVE)
    }
}

/// Index of the first minimum. Strict `<` keeps the earliest entry on ties.
fn first_min_index(values: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.into_iter().enumerate() {
        match best {
            Some((_, min)) if value >= min => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

/// Price one ingredient at every store in the catalog.
///
/// Consumes exactly one draw per store, in catalog order.
pub fn price_ingredient<R: Rng + ?Sized>(
    ingredient: &Ingredient,
    catalog: &StoreCatalog,
    rng: &mut R,
) -> Result<PricedIngredient> {
    ingredient.validate()?;
    if catalog.is_empty() {
        return Err(CostError::EmptyCatalog);
    }

    let prices: Vec<StorePrice> = catalog
        .iter()
        .map(|store| StorePrice {
            store_id: store.store_id.clone(),
            unit_price: simulate_unit_price(store, rng.r#gen::<f64>()),
        })
        .collect();

    let best_idx = first_min_index(prices.iter().map(|p| p.unit_price)).unwrap_or(0);
    let best_store_id = prices[best_idx].store_id.clone();

    tracing::debug!(
        ingredient = %ingredient.name,
        best_store = %best_store_id,
        "priced ingredient at {} stores",
        prices.len()
    );

    Ok(PricedIngredient {
        ingredient: ingredient.clone(),
        prices,
        best_store_id,
    })
}

/// Compare the cost of a meal plan across the store catalog.
///
/// Ingredients are priced in list order, so a seeded generator reproduces the
/// same result. Input is fully validated before any draw is taken.
pub fn compare_costs<R: Rng + ?Sized>(
    plan: &MealPlan,
    catalog: &StoreCatalog,
    rng: &mut R,
) -> Result<ComparisonResult> {
    if plan.ingredients.is_empty() {
        return Err(CostError::EmptyIngredientList);
    }
    if plan.servings < 1 {
        return Err(CostError::InvalidServings(plan.servings));
    }
    if catalog.is_empty() {
        return Err(CostError::EmptyCatalog);
    }
    for ingredient in &plan.ingredients {
        ingredient.validate()?;
    }

    let per_ingredient = plan
        .ingredients
        .iter()
        .map(|ingredient| price_ingredient(ingredient, catalog, rng))
        .collect::<Result<Vec<_>>>()?;

    let mut totals = vec![0.0_f64; catalog.len()];
    for priced in &per_ingredient {
        for (total, price) in totals.iter_mut().zip(&priced.prices) {
            *total += price.unit_price * priced.ingredient.quantity;
        }
    }

    let best_idx = first_min_index(totals.iter().copied()).unwrap_or(0);
    let servings = f64::from(plan.servings);

    let per_store: Vec<StoreTotal> = catalog
        .iter()
        .zip(&totals)
        .enumerate()
        .map(|(i, (store, &total_cost))| StoreTotal {
            store_id: store.store_id.clone(),
            total_cost,
            cost_per_serving: total_cost / servings,
            is_best_deal: i == best_idx,
        })
        .collect();

    let best_deal = per_store[best_idx].clone();

    tracing::info!(
        meal_plan = %plan.name,
        best_store = %best_deal.store_id,
        total_cost = best_deal.total_cost,
        "cost comparison complete"
    );

    Ok(ComparisonResult {
        meal_plan_name: plan.name.clone(),
        servings: plan.servings,
        per_ingredient,
        per_store,
        best_deal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog(stores: &[(&str, f64, f64)]) -> StoreCatalog {
        StoreCatalog::new(
            stores
                .iter()
                .map(|&(id, base, var)| Store::new(id, base, var))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_first_min_index_prefers_earliest() {
        assert_eq!(first_min_index([3.0, 1.0, 1.0]), Some(1));
        assert_eq!(first_min_index([2.0, 2.0]), Some(0));
        assert_eq!(first_min_index(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_simulate_unit_price_band() {
        let store = Store::new("A", 3.0, 0.5);
        assert!((simulate_unit_price(&store, 0.0) - 1.5).abs() < 1e-12);
        assert!((simulate_unit_price(&store, 0.5) - 3.0).abs() < 1e-12);
        assert!(simulate_unit_price(&store, 0.999_999) < 4.5);
    }

    #[test]
    fn test_simulate_unit_price_full_variation_stays_positive() {
        let store = Store::new("Free", 2.0, 1.0);
        assert_eq!(simulate_unit_price(&store, 0.0), f64::MIN_POSITIVE);
    }

    #[test]
    fn test_simulate_unit_price_keeps_tiny_prices() {
        let per_gram = Store::new("Bulk", 0.002, 0.0);
        assert_eq!(simulate_unit_price(&per_gram, 0.3), 0.002);

        let noisy = Store::new("Spice", 0.004, 0.5);
        assert!((simulate_unit_price(&noisy, 0.0) - 0.002).abs() < 1e-15);
    }

    #[test]
    fn test_price_ingredient_zero_variation_is_exact() {
        let cat = catalog(&[("A", 3.0, 0.0), ("B", 2.0, 0.0)]);
        let mut rng = StdRng::seed_from_u64(7);
        let priced = price_ingredient(&Ingredient::new("Rice", 2.0, "cup"), &cat, &mut rng).unwrap();

        assert_eq!(priced.unit_price("A"), Some(3.0));
        assert_eq!(priced.unit_price("B"), Some(2.0));
        assert_eq!(priced.line_cost("A"), Some(6.0));
        assert_eq!(priced.best_store_id, "B");
    }

    #[test]
    fn test_price_ingredient_tie_goes_to_first_store() {
        // A zero draw puts both stores on their floor: 3.0 × 0.5 == 2.0 × 0.75.
        let cat = catalog(&[("A", 3.0, 0.5), ("B", 2.0, 0.25)]);
        let mut rng = StepRng::new(0, 0);
        let priced = price_ingredient(&Ingredient::new("Oil", 1.0, "L"), &cat, &mut rng).unwrap();

        assert_eq!(priced.unit_price("A"), priced.unit_price("B"));
        assert_eq!(priced.best_store_id, "A");
    }

    #[test]
    fn test_price_ingredient_errors() {
        let cat = catalog(&[("A", 1.0, 0.1)]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = price_ingredient(&Ingredient::new("Salt", 0.0, "g"), &cat, &mut rng).unwrap_err();
        assert!(matches!(err, CostError::InvalidIngredient(_)));

        let empty = StoreCatalog::new(Vec::new()).unwrap();
        let err =
            price_ingredient(&Ingredient::new("Salt", 1.0, "g"), &empty, &mut rng).unwrap_err();
        assert!(matches!(err, CostError::EmptyCatalog));
    }

    #[test]
    fn test_compare_costs_rejects_before_drawing() {
        let cat = StoreCatalog::default();
        let plan = MealPlan::new(
            "Broken",
            vec![
                Ingredient::new("Rice", 1.0, "cup"),
                Ingredient::new("Beans", -1.0, "cup"),
            ],
            2,
        );

        let mut rng = StdRng::seed_from_u64(3);
        assert!(compare_costs(&plan, &cat, &mut rng).is_err());

        // The generator must be untouched by the failed call.
        let mut fresh = StdRng::seed_from_u64(3);
        assert_eq!(rng.r#gen::<u64>(), fresh.r#gen::<u64>());
    }

    #[test]
    fn test_compare_costs_single_best_deal() {
        let plan = MealPlan::new(
            "Stir Fry",
            vec![
                Ingredient::new("Broccoli", 1.0, "lb"),
                Ingredient::new("Soy sauce", 2.0, "tbsp"),
                Ingredient::new("Chicken", 1.5, "lb"),
            ],
            3,
        );
        let mut rng = StdRng::seed_from_u64(42);
        let result = compare_costs(&plan, &StoreCatalog::default(), &mut rng).unwrap();

        assert_eq!(result.per_store.iter().filter(|s| s.is_best_deal).count(), 1);
        let min = result
            .per_store
            .iter()
            .map(|s| s.total_cost)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_deal.total_cost, min);
        assert!(result.max_savings() >= 0.0);
    }
}
