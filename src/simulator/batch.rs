//! Running many independent simulations at once
//!
//! Each simulation allocates its own series and shares nothing, so inputs are
//! spread over the rayon thread pool without synchronization.

use ndarray::{Array2, Axis};
use rayon::prelude::*;

use super::{simulate_with, SimulationOptions};
use crate::data::SimulationInput;
use crate::error::BacError;
use crate::series::Series;

/// Simulate every input in parallel
///
/// Results are returned in input order. A failing input does not affect the
/// others.
pub fn simulate_batch(
    inputs: &[SimulationInput],
    options: &SimulationOptions,
) -> Vec<Result<Series, BacError>> {
    tracing::debug!(inputs = inputs.len(), "Simulating batch");

    let results: Vec<Result<Series, BacError>> = inputs
        .par_iter()
        .map(|input| simulate_with(input, options))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = inputs.len(), "Some batch inputs were rejected");
    }

    results
}

/// Simulate every input and collect the concentrations into a matrix
///
/// The result has one row per input and one column per time step of the
/// longest series. Shorter series are padded with zeros past their last sample.
///
/// # Errors
/// The first invalid input, in input order, aborts the whole matrix.
pub fn concentration_matrix(
    inputs: &[SimulationInput],
    options: &SimulationOptions,
) -> Result<Array2<f64>, BacError> {
    let series = simulate_batch(inputs, options)
        .into_iter()
        .collect::<Result<Vec<Series>, BacError>>()?;

    let columns = series.iter().map(Series::len).max().unwrap_or(0);
    tracing::debug!(rows = series.len(), columns, "Building concentration matrix");

    let mut matrix = Array2::<f64>::zeros((series.len(), columns));
    matrix
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(series.par_iter())
        .for_each(|(mut row, curve)| {
            for (cell, sample) in row.iter_mut().zip(curve.iter()) {
                *cell = sample.bac;
            }
        });

    Ok(matrix)
}
