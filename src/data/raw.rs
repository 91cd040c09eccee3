use serde::{Deserialize, Serialize};

use super::beverage::Beverage;
use super::input::SimulationInput;
use crate::error::{ensure_finite, BacError};

/// Untyped numeric fields as collected by a form
///
/// Every field is an `f64` because that is what text parsing produces. The
/// conversion into [`SimulationInput`] rejects non-finite numbers and drink
/// counts that are negative or fractional, then runs the regular validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub weight: f64,
    pub distribution_factor: f64,
    pub duration_hours: f64,
    pub drink_count: f64,
    pub volume_per_drink_cl: f64,
    pub absorption_rate: f64,
    pub elimination_rate: f64,
}

impl TryFrom<RawInput> for SimulationInput {
    type Error = BacError;

    fn try_from(raw: RawInput) -> Result<Self, Self::Error> {
        let drinks = ensure_finite("drink_count", raw.drink_count)?;
        if drinks < 0.0 || drinks.fract() != 0.0 || drinks > u32::MAX as f64 {
            return Err(BacError::invalid("drink_count", drinks));
        }

        let input = SimulationInput {
            weight: raw.weight,
            distribution_factor: raw.distribution_factor,
            duration_hours: raw.duration_hours,
            drink_count: drinks as u32,
            volume_per_drink_cl: raw.volume_per_drink_cl,
            absorption_rate: raw.absorption_rate,
            elimination_rate: raw.elimination_rate,
            beverage: Beverage::default(),
        };
        input.validate()?;
        Ok(input)
    }
}
