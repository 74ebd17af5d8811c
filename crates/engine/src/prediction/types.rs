#![forbid(unsafe_code)]

use crate::domain::DriverId;
use crate::score::ScoredDriver;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub winner: DriverId,
    /// Qualifying drivers, best score first.
    pub ranking: Vec<ScoredDriver>,
    pub summary: PredictionSummary,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PredictionSummary {
    pub laps: usize,
    pub drivers_seen: usize,
    pub drivers_qualified: usize,
}

impl Prediction {
    pub fn summarize(&self) -> PredictionSummary {
        self.summary
    }

    pub fn score_of(&self, driver: &str) -> Option<f64> {
        self.ranking
            .iter()
            .find(|scored| scored.driver.as_str() == driver)
            .map(|scored| scored.score)
    }
}
