use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::pricing::result::ComparisonResult;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write the ingredient breakdown as CSV: one row per ingredient with the unit
/// price at each store, followed by total and per-serving rows.
pub fn write_comparison_csv(result: &ComparisonResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec![
        "ingredient".to_string(),
        "quantity".to_string(),
        "unit".to_string(),
    ];
    header.extend(result.per_store.iter().map(|s| s.store_id.clone()));
    header.push("best_store".to_string());
    wtr.write_record(&header)?;

    for priced in &result.per_ingredient {
        let mut row = vec![
            priced.ingredient.name.clone(),
            priced.ingredient.quantity.to_string(),
            priced.ingredient.unit.clone(),
        ];
        row.extend(priced.prices.iter().map(|p| format!("{:.2}", p.unit_price)));
        row.push(priced.best_store_id.clone());
        wtr.write_record(&row)?;
    }

    let mut total = vec!["TOTAL".to_string(), String::new(), String::new()];
    total.extend(result.per_store.iter().map(|s| format!("{:.2}", s.total_cost)));
    total.push(result.best_deal.store_id.clone());
    wtr.write_record(&total)?;

    let mut per_serving = vec![
        "PER SERVING".to_string(),
        result.servings.to_string(),
        "servings".to_string(),
    ];
    per_serving.extend(
        result
            .per_store
            .iter()
            .map(|s| format!("{:.2}", s.cost_per_serving)),
    );
    per_serving.push(result.best_deal.store_id.clone());
    wtr.write_record(&per_serving)?;

    wtr.flush()?;
    tracing::info!(path = %path.display(), "wrote comparison CSV");
    Ok(())
}

/// Write the comparison to a JSON file, money rounded to cents.
pub fn write_comparison_json(result: &ComparisonResult, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "meal_plan": result.meal_plan_name,
        "servings": result.servings,
        "best_deal": {
            "store_id": result.best_deal.store_id,
            "total_cost": truncate(result.best_deal.total_cost, 2),
            "cost_per_serving": truncate(result.best_deal.cost_per_serving, 2),
        },
        "stores": result.per_store.iter().map(|s| {
            serde_json::json!({
                "store_id": s.store_id,
                "total_cost": truncate(s.total_cost, 2),
                "cost_per_serving": truncate(s.cost_per_serving, 2),
                "is_best_deal": s.is_best_deal,
            })
        }).collect::<Vec<_>>(),
        "ingredients": result.per_ingredient.iter().map(|p| {
            serde_json::json!({
                "name": p.ingredient.name,
                "quantity": p.ingredient.quantity,
                "unit": p.ingredient.unit,
                "best_store_id": p.best_store_id,
                "unit_prices": p.prices.iter().map(|price| {
                    serde_json::json!({
                        "store_id": price.store_id,
                        "unit_price": truncate(price.unit_price, 2),
                    })
                }).collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    tracing::info!(path = %path.display(), "wrote comparison JSON");
    Ok(())
}
