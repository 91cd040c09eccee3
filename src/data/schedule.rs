//! Drink timing
//!
//! Two spacing rules exist for spreading drinks over the drinking window and
//! they produce visibly different curves, so the rule is always named.

use serde::{Deserialize, Serialize};

/// How drink events are placed within `[0, duration_hours]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchedulePolicy {
    /// First drink at 0, last drink at the end of the window
    ///
    /// Spacing is `duration / (n - 1)`. A single drink is taken at 0.
    #[default]
    EndpointInclusive,
    /// Drinks spaced `duration / n` apart starting at 0
    ///
    /// The last drink falls strictly before the end of the window.
    EvenlySpaced,
}

impl SchedulePolicy {
    /// Ingestion times, in hours, for `count` drinks over `duration_hours`
    ///
    /// Returns an empty schedule for zero drinks.
    pub fn drink_times(&self, count: u32, duration_hours: f64) -> Vec<f64> {
        let interval = match (self, count) {
            (_, 0) => return Vec::new(),
            (SchedulePolicy::EndpointInclusive, 1) => 0.0,
            (SchedulePolicy::EndpointInclusive, n) => duration_hours / (n - 1) as f64,
            (SchedulePolicy::EvenlySpaced, n) => duration_hours / n as f64,
        };
        (0..count).map(|i| i as f64 * interval).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_drinks() {
        assert!(SchedulePolicy::EndpointInclusive
            .drink_times(0, 4.0)
            .is_empty());
        assert!(SchedulePolicy::EvenlySpaced.drink_times(0, 4.0).is_empty());
    }

    #[test]
    fn test_single_drink_at_zero() {
        assert_eq!(
            SchedulePolicy::EndpointInclusive.drink_times(1, 5.0),
            vec![0.0]
        );
        assert_eq!(SchedulePolicy::EvenlySpaced.drink_times(1, 5.0), vec![0.0]);
    }

    #[test]
    fn test_endpoint_inclusive_spacing() {
        let times = SchedulePolicy::EndpointInclusive.drink_times(3, 2.0);
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_evenly_spaced_ends_before_window() {
        let times = SchedulePolicy::EvenlySpaced.drink_times(4, 2.0);
        assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5]);
        assert!(*times.last().unwrap() < 2.0);
    }

    #[test]
    fn test_zero_duration_collapses_to_start() {
        let times = SchedulePolicy::EndpointInclusive.drink_times(3, 0.0);
        assert_eq!(times, vec![0.0, 0.0, 0.0]);
    }
}
