//! Simulation integration tests
//!
//! Exercise the public API from input construction to analysis and export.

#[path = "simulation/test_scenarios.rs"]
mod test_scenarios;

#[path = "simulation/test_boundary.rs"]
mod test_boundary;
