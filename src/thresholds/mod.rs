//! Chart overlays for a simulated curve
//!
//! Reference lines and background zones are derived from a [`Series`] for a
//! renderer to draw. Nothing here feeds back into the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::series::Series;

/// Concentrations, g/L, drawn as horizontal reference lines
pub const REFERENCE_LEVELS: [f64; 3] = [0.5, 0.8, 1.2];

/// RGBA fill colour with channel values 0-255 and alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Background band of the concentration axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// [0, 0.5)
    Low,
    /// [0.5, 2.0)
    Elevated,
    /// [2.0, 3.0)
    High,
    /// [3.0, 4.0)
    Severe,
    /// 4.0 and above
    Critical,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::Low,
        Zone::Elevated,
        Zone::High,
        Zone::Severe,
        Zone::Critical,
    ];

    /// Zone containing a concentration
    pub fn classify(bac: f64) -> Zone {
        match bac {
            c if c < 0.5 => Zone::Low,
            c if c < 2.0 => Zone::Elevated,
            c if c < 3.0 => Zone::High,
            c if c < 4.0 => Zone::Severe,
            _ => Zone::Critical,
        }
    }

    /// Lower bound and optional upper bound, g/L
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            Zone::Low => (0.0, Some(0.5)),
            Zone::Elevated => (0.5, Some(2.0)),
            Zone::High => (2.0, Some(3.0)),
            Zone::Severe => (3.0, Some(4.0)),
            Zone::Critical => (4.0, None),
        }
    }

    pub fn color(&self) -> Rgba {
        let (r, g, b) = match self {
            Zone::Low => (0, 255, 0),
            Zone::Elevated => (255, 255, 0),
            Zone::High => (255, 165, 0),
            Zone::Severe => (255, 0, 0),
            Zone::Critical => (139, 0, 0),
        };
        Rgba { r, g, b, a: 0.1 }
    }
}

/// A run of consecutive samples in the same zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpan {
    pub zone: Zone,
    /// Time of the first sample in the run, hours
    pub start: f64,
    /// Time of the last sample in the run, hours
    pub end: f64,
}

/// Group consecutive samples of a series by zone
pub fn zone_spans(series: &Series) -> Vec<ZoneSpan> {
    let mut spans: Vec<ZoneSpan> = Vec::new();
    for sample in series {
        let zone = Zone::classify(sample.bac);
        match spans.last_mut() {
            Some(span) if span.zone == zone => span.end = sample.t,
            _ => spans.push(ZoneSpan {
                zone,
                start: sample.t,
                end: sample.t,
            }),
        }
    }
    spans
}

/// First time the curve reaches each reference level
pub fn reference_crossings(series: &Series) -> Vec<(f64, Option<f64>)> {
    REFERENCE_LEVELS
        .iter()
        .map(|&level| (level, series.first_crossing(level)))
        .collect()
}
