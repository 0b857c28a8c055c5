/// Default store catalog: (store id, base unit price, ± variation fraction).
///
/// Catalog order is the tie-break order.
pub const DEFAULT_STORES: [(&str, f64, f64); 3] = [
    ("Walmart", 3.00, 0.5),
    ("Kroger", 3.50, 0.6),
    ("Costco", 2.80, 0.4),
];

/// Servings assumed when a plan does not say.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Unit preselected for new ingredients.
pub const DEFAULT_UNIT: &str = "lb";

/// Units offered when building a plan interactively.
pub const KNOWN_UNITS: [&str; 10] = ["lb", "g", "kg", "ml", "L", "tsp", "tbsp", "cup", "oz", "pc"];

/// Minimum Jaro-Winkler similarity for a fuzzy meal plan name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Tolerance used when comparing derived money amounts.
pub const COST_EPSILON: f64 = 1e-9;
