pub mod data;
pub mod error;
pub mod series;
pub mod simulator;
pub mod thresholds;

pub use crate::data::*;
pub use crate::series::{Sample, Series};
pub use crate::simulator::{
    concentration_matrix, simulate, simulate_batch, simulate_with, Rounding, SimulationOptions,
    MAX_SAMPLES,
};
pub use crate::thresholds::{reference_crossings, zone_spans, Zone, ZoneSpan, REFERENCE_LEVELS};
pub use error::BacError;

pub mod prelude {
    pub mod data {
        pub use crate::data::{Beverage, RawInput, SchedulePolicy, SimulationInput};
    }
    pub mod simulator {
        pub use crate::simulator::{
            absorption::{absorbed_from_drink, total_absorbed},
            concentration_matrix, simulate, simulate_batch, simulate_with, Rounding,
            SimulationOptions,
        };
    }

    pub use crate::data::*;
    pub use crate::error::BacError;
    pub use crate::series::{Sample, Series};
    pub use crate::simulator::{simulate, simulate_with, Rounding, SimulationOptions};
    pub use crate::thresholds::{Zone, ZoneSpan};
}
