//! Simulated concentration-time series
//!
//! A [`Series`] is produced fresh by every simulation call and owned by the
//! caller afterwards. The analysis helpers in this module only read it.

mod analysis;
mod export;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BacError;

/// One point of the curve: hours since the first drink and BAC in g/L
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub bac: f64,
}

impl Sample {
    pub fn new(t: f64, bac: f64) -> Self {
        Self { t, bac }
    }
}

/// Ordered samples with strictly increasing time
///
/// Only the simulator builds a series sample by sample. Anything read back
/// from JSON goes through [`Series::try_from`], which checks the same
/// invariants: finite values, the first sample at `t = 0`, strictly
/// increasing time and no negative concentration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        debug_assert!(
            self.samples.last().map_or(true, |last| last.t < sample.t),
            "sample times must be strictly increasing"
        );
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Sample times, hours
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.t).collect()
    }

    /// Concentrations, g/L
    pub fn concentrations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.bac).collect()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl TryFrom<Vec<Sample>> for Series {
    type Error = BacError;

    fn try_from(samples: Vec<Sample>) -> Result<Self, Self::Error> {
        if let Some(first) = samples.first() {
            if first.t != 0.0 {
                return Err(BacError::invalid("t", first.t));
            }
        }
        for sample in &samples {
            if !sample.t.is_finite() {
                return Err(BacError::invalid("t", sample.t));
            }
            if !sample.bac.is_finite() || sample.bac < 0.0 {
                return Err(BacError::invalid("bac", sample.bac));
            }
        }
        if let Some(pair) = samples.windows(2).find(|w| w[1].t <= w[0].t) {
            return Err(BacError::invalid(
                "t",
                format!("{} after {}", pair[1].t, pair[0].t),
            ));
        }
        Ok(Self { samples })
    }
}

impl From<Series> for Vec<Sample> {
    fn from(series: Series) -> Self {
        series.samples
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time (h)\tBAC (g/L)")?;
        for sample in &self.samples {
            writeln!(f, "{:.2}\t\t{:.4}", sample.t, sample.bac)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn series_from(points: &[(f64, f64)]) -> Series {
    let mut series = Series::with_capacity(points.len());
    for &(t, bac) in points {
        series.push(Sample::new(t, bac));
    }
    series
}
