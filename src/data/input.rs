use serde::{Deserialize, Serialize};

use super::beverage::Beverage;
use crate::error::{ensure_non_negative, ensure_positive, BacError};

/// Largest number of drinks a session may hold
pub const MAX_DRINK_COUNT: u32 = 1_000;

/// Everything the simulator needs to know about one drinking session
///
/// Units: kilograms, liters per kilogram, hours, centiliters, and grams per
/// liter for concentrations. Construct with [`SimulationInput::new`], from a
/// [`RawInput`](super::RawInput), or from a JSON scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Body mass, kg
    pub weight: f64,
    /// Widmark distribution ratio `r`, L/kg
    pub distribution_factor: f64,
    /// Length of the drinking window, hours
    pub duration_hours: f64,
    /// Number of drink events
    pub drink_count: u32,
    /// Volume of a single drink, cl
    pub volume_per_drink_cl: f64,
    /// First-order absorption rate constant `k`, 1/h
    pub absorption_rate: f64,
    /// Zero-order elimination rate `beta`, g/L per hour
    pub elimination_rate: f64,
    /// Drink composition, a 40% spirit unless overridden
    #[serde(default)]
    pub beverage: Beverage,
}

impl SimulationInput {
    pub fn new(
        weight: f64,
        distribution_factor: f64,
        duration_hours: f64,
        drink_count: u32,
        volume_per_drink_cl: f64,
        absorption_rate: f64,
        elimination_rate: f64,
    ) -> Self {
        Self {
            weight,
            distribution_factor,
            duration_hours,
            drink_count,
            volume_per_drink_cl,
            absorption_rate,
            elimination_rate,
            beverage: Beverage::default(),
        }
    }

    /// Replace the drink composition
    pub fn with_beverage(mut self, beverage: Beverage) -> Self {
        self.beverage = beverage;
        self
    }

    /// Grams of ethanol delivered by one drink
    pub fn grams_per_drink(&self) -> f64 {
        self.beverage.grams_of_ethanol(self.volume_per_drink_cl)
    }

    /// Body water volume the alcohol distributes into, L
    pub fn distribution_volume(&self) -> f64 {
        self.distribution_factor * self.weight
    }

    /// Check every field before any simulation work starts
    pub fn validate(&self) -> Result<(), BacError> {
        ensure_positive("weight", self.weight)?;
        ensure_positive("distribution_factor", self.distribution_factor)?;
        ensure_non_negative("duration_hours", self.duration_hours)?;
        if self.drink_count > MAX_DRINK_COUNT {
            return Err(BacError::invalid("drink_count", self.drink_count));
        }
        ensure_positive("volume_per_drink_cl", self.volume_per_drink_cl)?;
        ensure_positive("absorption_rate", self.absorption_rate)?;
        ensure_non_negative("elimination_rate", self.elimination_rate)?;
        self.beverage.validate()
    }

    /// Parse and validate a scenario from JSON
    ///
    /// `beverage` may be omitted, in which case the default spirit is used.
    ///
    /// ```ignore
    /// let input = SimulationInput::from_json(r#"{
    ///     "weight": 70.0,
    ///     "distribution_factor": 0.7,
    ///     "duration_hours": 2.0,
    ///     "drink_count": 3,
    ///     "volume_per_drink_cl": 4.0,
    ///     "absorption_rate": 1.0,
    ///     "elimination_rate": 0.15
    /// }"#)?;
    /// ```
    pub fn from_json(json: &str) -> Result<Self, BacError> {
        let input: SimulationInput = serde_json::from_str(json)?;
        input.validate()?;
        Ok(input)
    }

    /// Serialize the scenario as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, BacError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
