#![forbid(unsafe_code)]

//! Race winner prediction from lap timing data.
//!
//! The engine turns a [`LapDataset`] into per-driver [`DriverStats`], scores
//! every qualifying driver with a fixed weighted formula and picks the
//! highest score. Everything here is a pure function of the borrowed dataset.
//!
//! ```
//! use engine::{DriverId, LapDataset, LapRecord, predict};
//! use std::time::Duration;
//!
//! let ver = DriverId::new("VER").unwrap();
//! let laps: LapDataset = [90.1, 90.3, 90.0]
//!     .into_iter()
//!     .map(|secs| LapRecord::timed(ver.clone(), Duration::from_secs_f64(secs)))
//!     .collect();
//!
//! assert_eq!(predict(&laps).unwrap().as_str(), "VER");
//! ```

pub mod aggregate;
pub mod domain;
mod error;
pub mod prediction;
pub mod score;

pub use aggregate::{MIN_VALID_LAPS, aggregate};
pub use domain::{DriverId, DriverStats, LapDataset, LapRecord, Standings};
pub use error::{Error, ErrorKind, Statistic};
pub use prediction::{Prediction, PredictionSummary, Predictor, StatisticalPredictor, predict};
pub use score::{Ranking, ScoredDriver, Weights, score, select};
