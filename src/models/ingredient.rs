use serde::{Deserialize, Serialize};

use crate::error::{CostError, Result};

/// A single ingredient line in a meal plan.
///
/// Identity is positional: two lines with the same name are distinct entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    /// Quantity must be positive and finite; name must be present.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CostError::InvalidIngredient(
                "ingredient name is empty".to_string(),
            ));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(CostError::InvalidIngredient(format!(
                "{} has non-positive quantity {}",
                self.name, self.quantity
            )));
        }
        Ok(())
    }

    /// Human-readable quantity, e.g. "2 cup" or "1.5 lb".
    pub fn quantity_label(&self) -> String {
        format!("{} {}", self.quantity, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_quantity() {
        assert!(Ingredient::new("Rice", 2.0, "cup").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        for qty in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Ingredient::new("Rice", qty, "cup").validate().unwrap_err();
            assert!(matches!(err, CostError::InvalidIngredient(_)));
        }
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let err = Ingredient::new("  ", 1.0, "lb").validate().unwrap_err();
        assert!(matches!(err, CostError::InvalidIngredient(_)));
    }

    #[test]
    fn test_quantity_label() {
        assert_eq!(Ingredient::new("Milk", 1.5, "L").quantity_label(), "1.5 L");
        assert_eq!(Ingredient::new("Rice", 2.0, "cup").quantity_label(), "2 cup");
    }
}
