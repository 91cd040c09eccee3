use thiserror::Error;

#[derive(Error, Debug)]
pub enum BacError {
    /// A simulation input or option is out of range or not finite
    #[error("Invalid input: {param} = {value}")]
    InvalidInput { param: String, value: String },

    /// A scenario could not be parsed from JSON
    #[error("Failed to parse scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a series as CSV failed
    #[error("CSV export failed: {0}")]
    Csv(String),
}

impl BacError {
    pub(crate) fn invalid(param: &str, value: impl ToString) -> Self {
        BacError::InvalidInput {
            param: param.to_string(),
            value: value.to_string(),
        }
    }
}

/// Reject non-finite values
pub(crate) fn ensure_finite(param: &str, value: f64) -> Result<f64, BacError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BacError::invalid(param, value))
    }
}

/// Reject non-finite values and values that are not strictly positive
pub(crate) fn ensure_positive(param: &str, value: f64) -> Result<f64, BacError> {
    if ensure_finite(param, value)? > 0.0 {
        Ok(value)
    } else {
        Err(BacError::invalid(param, value))
    }
}

/// Reject non-finite values and negative values
pub(crate) fn ensure_non_negative(param: &str, value: f64) -> Result<f64, BacError> {
    if ensure_finite(param, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(BacError::invalid(param, value))
    }
}
