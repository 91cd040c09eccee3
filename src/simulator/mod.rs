//! Blood alcohol concentration simulator
//!
//! Drinks are absorbed with first-order kinetics and alcohol is eliminated at
//! a constant (zero-order) rate while any is present. The curve is integrated
//! on a fixed time grid from the first drink until `tail_hours` after the
//! drinking window closes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bacsim::prelude::*;
//!
//! let input = SimulationInput::new(70.0, 0.7, 2.0, 3, 4.0, 1.0, 0.15);
//! let series = simulate(&input)?;
//!
//! if let Some(peak) = series.peak() {
//!     println!("Peak {:.3} g/L at {:.1} h", peak.bac, peak.t);
//! }
//! ```
//!
//! # Integration step
//!
//! At each grid time `t`:
//!
//! | Quantity | Value |
//! |----------|-------|
//! | Δc | `(absorbed(t) − absorbed(t_prev)) / (r · W)` |
//! | Δe | `β · dt` if the concentration before the step is positive, else 0 |
//! | c | `max(c + Δc − Δe, 0)` |
//!
//! Elimination and absorption are combined before the floor is applied.

pub mod absorption;
pub mod batch;
pub mod options;


use crate::data::SimulationInput;
use crate::error::BacError;
use crate::series::{Sample, Series};

pub use absorption::{absorbed_from_drink, total_absorbed};
pub use batch::{concentration_matrix, simulate_batch};
pub use options::{Rounding, SimulationOptions, DEFAULT_DT, DEFAULT_TAIL_HOURS};

/// Relative slack when counting grid steps, so `10.0 / 0.1` yields 100 steps
const STEP_TOLERANCE: f64 = 1e-9;

/// Largest number of samples a single simulation may produce
///
/// One million samples cover about eleven years at the default 0.1 h step.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Simulate a BAC curve with the default [`SimulationOptions`]
pub fn simulate(input: &SimulationInput) -> Result<Series, BacError> {
    simulate_with(input, &SimulationOptions::default())
}

/// Simulate a BAC curve
///
/// Both the input and the options are validated before any work is done, so
/// a failed call never yields a partial series.
///
/// # Errors
/// [`BacError::InvalidInput`] if any field is non-finite or out of range, or
/// if the time grid would need more than [`MAX_SAMPLES`] samples.
pub fn simulate_with(
    input: &SimulationInput,
    options: &SimulationOptions,
) -> Result<Series, BacError> {
    input.validate()?;
    options.validate()?;

    let t_end = input.duration_hours + options.tail_hours;
    let steps = step_count(t_end, options.dt)?;

    let drink_times = options
        .schedule
        .drink_times(input.drink_count, input.duration_hours);
    let grams = input.grams_per_drink();
    let volume = input.distribution_volume();
    let k = input.absorption_rate;
    let beta = input.elimination_rate;
    let dt = options.dt;

    let mut series = Series::with_capacity(steps + 1);
    let mut previous_absorbed = 0.0;
    let mut concentration: f64 = 0.0;

    for i in 0..=steps {
        let t = (i as f64 * dt).min(t_end);

        let absorbed = total_absorbed(grams, k, &drink_times, t);
        let delta_absorbed = (absorbed - previous_absorbed) / volume;
        previous_absorbed = absorbed;

        let delta_eliminated = if concentration > 0.0 { beta * dt } else { 0.0 };

        concentration = (concentration + delta_absorbed - delta_eliminated).max(0.0);

        series.push(Sample::new(
            options.rounding.time(t),
            options.rounding.concentration(concentration),
        ));
    }

    Ok(series)
}

/// Number of whole steps of `dt` that fit in `[0, t_end]`
///
/// Fails when the grid is not finite or would exceed [`MAX_SAMPLES`] samples.
fn step_count(t_end: f64, dt: f64) -> Result<usize, BacError> {
    let ratio = t_end / dt;
    let steps = (ratio + ratio.abs().max(1.0) * STEP_TOLERANCE).floor();
    if !steps.is_finite() || steps < 0.0 || steps >= MAX_SAMPLES as f64 {
        return Err(BacError::invalid(
            "duration_hours + tail_hours",
            format!("{} h at dt = {} h exceeds {} samples", t_end, dt, MAX_SAMPLES),
        ));
    }
    Ok(steps as usize)
}
