use serde::{Deserialize, Serialize};

use crate::data::SchedulePolicy;
use crate::error::{ensure_non_negative, ensure_positive, BacError};

/// Default integration step, hours
pub const DEFAULT_DT: f64 = 0.1;

/// Default observation tail after the last drink window, hours
pub const DEFAULT_TAIL_HOURS: f64 = 8.0;

/// Smallest step for which times rounded to two decimals stay distinct
const MIN_DISPLAY_DT: f64 = 0.01;

/// How recorded samples are rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rounding {
    /// Time to 2 decimals, concentration to 4 decimals
    ///
    /// Applied to each recorded sample only; the running state keeps full
    /// precision.
    #[default]
    Display,
    /// Record the full-precision state
    Exact,
}

impl Rounding {
    #[inline]
    pub(crate) fn time(&self, t: f64) -> f64 {
        match self {
            Rounding::Display => round_to(t, 2),
            Rounding::Exact => t,
        }
    }

    #[inline]
    pub(crate) fn concentration(&self, c: f64) -> f64 {
        match self {
            Rounding::Display => round_to(c, 4),
            Rounding::Exact => c,
        }
    }
}

#[inline]
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Integration settings
///
/// The defaults reproduce the standard curve: 0.1 h steps, an 8 hour tail,
/// endpoint-inclusive drink spacing and display rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationOptions {
    /// Step size, hours
    pub dt: f64,
    /// Hours simulated after the drinking window closes
    pub tail_hours: f64,
    /// Drink spacing rule
    pub schedule: SchedulePolicy,
    /// Rounding of recorded samples
    pub rounding: Rounding,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            tail_hours: DEFAULT_TAIL_HOURS,
            schedule: SchedulePolicy::default(),
            rounding: Rounding::default(),
        }
    }
}

impl SimulationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the integration step
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the observation tail after drinking ends
    pub fn with_tail_hours(mut self, tail_hours: f64) -> Self {
        self.tail_hours = tail_hours;
        self
    }

    /// Set the drink spacing rule
    pub fn with_schedule(mut self, schedule: SchedulePolicy) -> Self {
        self.schedule = schedule;
        self
    }

    /// Set the rounding of recorded samples
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BacError> {
        ensure_positive("dt", self.dt)?;
        ensure_non_negative("tail_hours", self.tail_hours)?;
        if self.rounding == Rounding::Display && self.dt < MIN_DISPLAY_DT {
            return Err(BacError::invalid("dt", self.dt));
        }
        Ok(())
    }
}
