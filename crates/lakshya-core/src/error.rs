use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid {field}: {value} (must be a non-negative finite number)")]
    InvalidNutrient { field: &'static str, value: f64 },

    #[error("invalid portion: {0} (must be a positive finite number)")]
    InvalidPortion(f64),

    #[error("meal name must not be empty")]
    EmptyName,

    #[error("invalid goal {field}: {value}")]
    InvalidGoal { field: &'static str, value: f64 },
}
