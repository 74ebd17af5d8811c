#![forbid(unsafe_code)]

mod ids;
mod lap;
mod stats;

pub use ids::DriverId;
pub use lap::{LapDataset, LapRecord};
pub use stats::{DriverStats, Standings};
