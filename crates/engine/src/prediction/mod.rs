#![forbid(unsafe_code)]

mod predictor;
mod types;

pub use predictor::{Predictor, StatisticalPredictor, predict};
pub use types::{Prediction, PredictionSummary};
