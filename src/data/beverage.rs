use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, BacError};

/// Alcohol-by-volume fraction of a standard spirit
pub const DEFAULT_ABV: f64 = 0.40;

/// Density of ethanol, g/mL
pub const ETHANOL_DENSITY: f64 = 0.789;

/// Milliliters per centiliter
const ML_PER_CL: f64 = 10.0;

/// Composition of the drink being consumed
///
/// Converts a drink volume into grams of pure ethanol. The defaults describe a
/// 40% spirit; override them for beer or wine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beverage {
    /// Alcohol-by-volume fraction, in (0, 1]
    pub abv: f64,
    /// Ethanol density, g/mL
    pub density: f64,
}

impl Default for Beverage {
    fn default() -> Self {
        Self {
            abv: DEFAULT_ABV,
            density: ETHANOL_DENSITY,
        }
    }
}

impl Beverage {
    /// A beverage with the given ABV and the standard ethanol density
    pub fn with_abv(abv: f64) -> Self {
        Self {
            abv,
            ..Default::default()
        }
    }

    /// Grams of ethanol in `volume_cl` centiliters
    #[inline]
    pub fn grams_of_ethanol(&self, volume_cl: f64) -> f64 {
        volume_cl * ML_PER_CL * self.abv * self.density
    }

    pub(crate) fn validate(&self) -> Result<(), BacError> {
        if ensure_positive("abv", self.abv)? > 1.0 {
            return Err(BacError::invalid("abv", self.abv));
        }
        ensure_positive("density", self.density)?;
        Ok(())
    }
}
