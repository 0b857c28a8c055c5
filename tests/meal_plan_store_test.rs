use rand::rngs::StdRng;
use rand::SeedableRng;

use meal_cost_compare_rs::models::{Ingredient, MealPlan, StoreCatalog};
use meal_cost_compare_rs::pricing::compare_costs;
use meal_cost_compare_rs::state::{load_meal_plans, save_meal_plans, MealPlanStore};
use meal_cost_compare_rs::CostError;

fn sample_plans() -> Vec<MealPlan> {
    vec![
        MealPlan::new(
            "Beef Tacos",
            vec![
                Ingredient::new("Ground beef", 1.0, "lb"),
                Ingredient::new("Tortillas", 8.0, "pc"),
                Ingredient::new("Cheddar", 1.0, "cup"),
            ],
            4,
        ),
        MealPlan::new(
            "Vegetable Stir Fry",
            vec![
                Ingredient::new("Broccoli", 1.0, "lb"),
                Ingredient::new("Bell pepper", 2.0, "pc"),
            ],
            2,
        ),
    ]
}

#[test]
fn test_saved_plan_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meal_plans.json");

    let mut store = MealPlanStore::new(load_meal_plans(&path).unwrap());
    assert!(store.is_empty());

    for plan in sample_plans() {
        store.add(plan).unwrap();
    }
    save_meal_plans(&path, &store.to_plans()).unwrap();

    let reloaded = MealPlanStore::new(load_meal_plans(&path).unwrap());
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get("beef tacos").unwrap().ingredients.len(), 3);
}

#[test]
fn test_compare_and_cache_best_deal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meal_plans.json");
    save_meal_plans(&path, &sample_plans()).unwrap();

    let mut store = MealPlanStore::new(load_meal_plans(&path).unwrap());
    let plan = store.find_closest("beef taco").cloned().unwrap();
    assert_eq!(plan.name, "Beef Tacos");

    let mut rng = StdRng::seed_from_u64(10);
    let result = compare_costs(&plan, &StoreCatalog::default(), &mut rng).unwrap();

    store.get_mut(&plan.name).unwrap().record_best_deal(&result);
    save_meal_plans(&path, &store.to_plans()).unwrap();

    let reloaded = MealPlanStore::new(load_meal_plans(&path).unwrap());
    let cached = reloaded.get("Beef Tacos").unwrap();
    let total = cached.total_cost.unwrap();
    let per_serving = cached.cost_per_serving.unwrap();

    assert!((total - result.best_deal.total_cost).abs() <= 0.006);
    assert!((per_serving - result.best_deal.cost_per_serving).abs() <= 0.006);
    assert!(reloaded.get("Vegetable Stir Fry").unwrap().total_cost.is_none());
}

#[test]
fn test_remove_then_missing() {
    let mut store = MealPlanStore::new(sample_plans());
    store.remove("beef tacos").unwrap();

    assert!(store.get("Beef Tacos").is_none());
    assert!(matches!(
        store.remove("Beef Tacos"),
        Err(CostError::MealPlanNotFound(_))
    ));
    assert_eq!(store.names(), vec!["Vegetable Stir Fry"]);
}
