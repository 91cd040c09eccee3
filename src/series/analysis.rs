//! Read-only summaries of a simulated curve
//!
//! Segment handling follows the linear trapezoid: between two samples the
//! concentration is taken to change linearly.

use super::{Sample, Series};

/// Linear trapezoidal area for a segment
#[inline]
fn auc_linear(c1: f64, c2: f64, dt: f64) -> f64 {
    (c1 + c2) / 2.0 * dt
}

/// Time at which the line through two samples reaches `level`
#[inline]
fn interpolate_time(a: &Sample, b: &Sample, level: f64) -> f64 {
    a.t + (level - a.bac) * (b.t - a.t) / (b.bac - a.bac)
}

/// Time spent strictly above `level` within one segment
fn segment_time_above(a: &Sample, b: &Sample, level: f64) -> f64 {
    let dt = b.t - a.t;
    if dt <= 0.0 {
        return 0.0;
    }
    match (a.bac > level, b.bac > level) {
        (true, true) => dt,
        (false, false) => 0.0,
        (true, false) => interpolate_time(a, b, level) - a.t,
        (false, true) => b.t - interpolate_time(a, b, level),
    }
}

impl Series {
    /// Sample with the highest concentration; the earliest one wins ties
    pub fn peak(&self) -> Option<&Sample> {
        self.iter()
            .fold(None, |best: Option<&Sample>, s| match best {
                Some(b) if b.bac >= s.bac => Some(b),
                _ => Some(s),
            })
    }

    /// Area under the curve, g·h/L
    pub fn auc(&self) -> f64 {
        self.samples()
            .windows(2)
            .map(|w| auc_linear(w[0].bac, w[1].bac, w[1].t - w[0].t))
            .sum()
    }

    /// Total hours the curve spends strictly above `level`
    ///
    /// Crossing points are linearly interpolated.
    pub fn time_above(&self, level: f64) -> f64 {
        self.samples()
            .windows(2)
            .map(|w| segment_time_above(&w[0], &w[1], level))
            .sum()
    }

    /// First time the curve reaches `level`, interpolated between samples
    pub fn first_crossing(&self, level: f64) -> Option<f64> {
        let first = self.first()?;
        if first.bac >= level {
            return Some(first.t);
        }
        self.samples()
            .windows(2)
            .find(|w| w[0].bac < level && w[1].bac >= level)
            .map(|w| interpolate_time(&w[0], &w[1], level))
    }

    /// First sample time after the peak at which the concentration is back to zero
    ///
    /// `None` when the curve never rises above zero or has not returned to zero
    /// by the end of the series.
    pub fn sober_at(&self) -> Option<f64> {
        let peak = self.peak()?;
        if peak.bac <= 0.0 {
            return None;
        }
        self.iter()
            .skip_while(|s| s.t <= peak.t)
            .find(|s| s.bac <= 0.0)
            .map(|s| s.t)
    }
}
