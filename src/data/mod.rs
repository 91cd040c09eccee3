pub mod beverage;
pub mod input;
pub mod raw;
pub mod schedule;
pub use beverage::{Beverage, DEFAULT_ABV, ETHANOL_DENSITY};
pub use input::{SimulationInput, MAX_DRINK_COUNT};
pub use raw::RawInput;
pub use schedule::SchedulePolicy;
