use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostError {
    #[error("Invalid ingredient: {0}")]
    InvalidIngredient(String),

    #[error("Store catalog is empty")]
    EmptyCatalog,

    #[error("Meal plan has no ingredients")]
    EmptyIngredientList,

    #[error("Invalid servings: {0} (must be at least 1)")]
    InvalidServings(u32),

    #[error("Invalid store: {0}")]
    InvalidStore(String),

    #[error("Meal plan not found: {0}")]
    MealPlanNotFound(String),

    #[error("Meal plan already exists: {0}")]
    DuplicateMealPlan(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CostError {
    /// Validation errors are fixed by correcting the input; everything else is I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CostError::InvalidIngredient(_)
                | CostError::EmptyCatalog
                | CostError::EmptyIngredientList
                | CostError::InvalidServings(_)
                | CostError::InvalidStore(_)
        )
    }

    /// Process exit status: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        if self.is_validation() { 2 } else { 1 }
    }
}

pub type Result<T> = std::result::Result<T, CostError>;
