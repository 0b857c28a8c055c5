use crate::models::{MealPlan, StoreCatalog};
use crate::pricing::result::{ComparisonResult, PricedIngredient};

/// Format a money amount as `$x.xx`.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Ingredient cell for one store: line cost and unit price, e.g. `$6.00 ($3.00/cup)`.
pub fn format_price_cell(priced: &PricedIngredient, store_id: &str) -> String {
    match (priced.line_cost(store_id), priced.unit_price(store_id)) {
        (Some(line), Some(unit)) => format!(
            "{} ({}/{})",
            format_currency(line),
            format_currency(unit),
            priced.ingredient.unit
        ),
        _ => "-".to_string(),
    }
}

/// Display the best-deal banner, store cards and ingredient breakdown.
pub fn display_comparison(result: &ComparisonResult) {
    let best = &result.best_deal;

    println!();
    println!("=== Cost Comparison: {} ===", result.meal_plan_name);
    println!();
    println!("Best Deal: {}", best.store_id);
    println!(
        "  Total: {} | Cost per serving: {}",
        format_currency(best.total_cost),
        format_currency(best.cost_per_serving)
    );
    let savings = result.max_savings();
    if savings > 0.0 {
        println!(
            "  Shopping at {} saves up to {} on this meal plan.",
            best.store_id,
            format_currency(savings)
        );
    }

    println!();
    println!("--- Stores ---");
    let store_width = result
        .per_store
        .iter()
        .map(|s| s.store_id.len())
        .max()
        .unwrap_or(8);

    for store in &result.per_store {
        let tag = if store.is_best_deal { "  [Best Deal]" } else { "" };
        println!(
            "  {:<width$}  total {:>9} | per serving {:>8} | servings {}{}",
            store.store_id,
            format_currency(store.total_cost),
            format_currency(store.cost_per_serving),
            result.servings,
            tag,
            width = store_width
        );
    }

    println!();
    println!("--- Ingredient Breakdown ---");
    display_breakdown(result);
    println!();
}

fn display_breakdown(result: &ComparisonResult) {
    let name_width = result
        .per_ingredient
        .iter()
        .map(|p| p.ingredient.name.len())
        .chain(std::iter::once("Ingredient".len()))
        .max()
        .unwrap_or(10);
    let qty_width = result
        .per_ingredient
        .iter()
        .map(|p| p.ingredient.quantity_label().len())
        .chain(std::iter::once("Quantity".len()))
        .max()
        .unwrap_or(8);

    // Cells carry a leading marker so the best store per ingredient stands out.
    let rows: Vec<Vec<String>> = result
        .per_ingredient
        .iter()
        .map(|priced| {
            result
                .per_store
                .iter()
                .map(|store| {
                    let marker = if priced.is_best_at(&store.store_id) { "*" } else { " " };
                    format!("{}{}", marker, format_price_cell(priced, &store.store_id))
                })
                .collect()
        })
        .collect();

    let col_widths: Vec<usize> = result
        .per_store
        .iter()
        .enumerate()
        .map(|(col, store)| {
            rows.iter()
                .map(|r| r[col].len())
                .chain(std::iter::once(store.store_id.len() + 1))
                .max()
                .unwrap_or(10)
        })
        .collect();

    let mut header = format!("  {:<nw$}  {:<qw$}", "Ingredient", "Quantity", nw = name_width, qw = qty_width);
    for (store, width) in result.per_store.iter().zip(&col_widths) {
        header.push_str(&format!("  {:<w$}", format!(" {}", store.store_id), w = *width));
    }
    println!("{}", header);

    for (priced, cells) in result.per_ingredient.iter().zip(&rows) {
        let mut line = format!(
            "  {:<nw$}  {:<qw$}",
            priced.ingredient.name,
            priced.ingredient.quantity_label(),
            nw = name_width,
            qw = qty_width
        );
        for (cell, width) in cells.iter().zip(&col_widths) {
            line.push_str(&format!("  {:<w$}", cell, w = *width));
        }
        println!("{}", line);
    }

    let mut footer = format!("  {:<w$}", "Total", w = name_width + qty_width + 2);
    for (store, width) in result.per_store.iter().zip(&col_widths) {
        footer.push_str(&format!(
            "  {:<w$}",
            format!(" {}", format_currency(store.total_cost)),
            w = *width
        ));
    }
    println!("{}", footer);
    println!("  (* = cheapest store for that ingredient)");
}

/// Display the active store catalog.
pub fn display_catalog(catalog: &StoreCatalog) {
    println!();
    println!("=== Stores ({}) ===", catalog.len());
    println!();

    for store in catalog {
        println!(
            "  {} - base {} ±{:.0}% (range {} to {})",
            store.store_id,
            format_currency(store.base_price),
            store.variation * 100.0,
            format_currency(store.price_floor()),
            format_currency(store.base_price * (1.0 + store.variation))
        );
    }

    println!();
}

/// Display saved meal plans with their cached best-deal cost, if any.
pub fn display_plan_list(plans: &[&MealPlan]) {
    if plans.is_empty() {
        println!("No saved meal plans. Use 'new' to create one.");
        return;
    }

    println!();
    println!("=== Saved Meal Plans ({}) ===", plans.len());
    println!();

    let width = plans.iter().map(|p| p.name.len()).max().unwrap_or(10);

    for plan in plans {
        let cost = match (plan.total_cost, plan.cost_per_serving) {
            (Some(total), Some(per)) => format!(
                "best {} ({}/serving)",
                format_currency(total),
                format_currency(per)
            ),
            _ => "not compared yet".to_string(),
        };
        println!(
            "  {:<width$}  {:>2} ingredients | {} servings | {}",
            plan.name,
            plan.ingredients.len(),
            plan.servings,
            cost,
            width = width
        );
        if let Some(desc) = &plan.description {
            println!("  {:<width$}  {}", "", desc, width = width);
        }
    }

    println!();
}
