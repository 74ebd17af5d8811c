#![forbid(unsafe_code)]

use crate::aggregate::aggregate;
use crate::domain::{DriverId, LapDataset};
use crate::error::Error;
use crate::prediction::{Prediction, PredictionSummary};
use crate::score::select;
use tracing::debug;

pub trait Predictor: Send + Sync {
    /// Rank the drivers of one race session and pick the winner.
    fn predict(&self, laps: &LapDataset) -> Result<Prediction, Error>;
}

/// Fixed-formula predictor: pace, consistency and peak speed, weighted
/// 0.4 / 0.3 / 0.3.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticalPredictor;

impl StatisticalPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl Predictor for StatisticalPredictor {
    fn predict(&self, laps: &LapDataset) -> Result<Prediction, Error> {
        let standings = aggregate(laps)?;
        let ranking = select(&standings)?;
        let summary = PredictionSummary {
            laps: standings.laps_seen(),
            drivers_seen: standings.drivers_seen(),
            drivers_qualified: standings.len(),
        };
        debug!(winner = %ranking.winner, ?summary, "prediction made");

        Ok(Prediction {
            winner: ranking.winner,
            ranking: ranking.drivers,
            summary,
        })
    }
}

/// Predict the winner of the session described by `laps`.
pub fn predict(laps: &LapDataset) -> Result<DriverId, Error> {
    StatisticalPredictor.predict(laps).map(|p| p.winner)
}
