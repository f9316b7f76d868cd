//! Error types for delivery fee calculation

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Delivery fee errors
#[derive(Error, Debug)]
pub enum Error {
    /// Distance or weight was not a strictly positive, finite number.
    #[error("distance and weight must be positive (distance_km={distance_km}, weight_kg={weight_kg})")]
    InvalidInput { distance_km: f64, weight_kg: f64 },

    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),
}

impl Error {
    /// True for the call-level validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}
