//! Turns a (season, race) request into a predicted winner.

use engine::{Prediction, Predictor};
use serde::{Deserialize, Serialize};
use session::SessionProvider;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionRequest {
    pub year: i32,
    pub grand_prix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionResponse {
    pub predicted_winner: String,
}

/// Full outcome of a prediction: the winner plus how every qualifying driver
/// scored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionReport {
    pub year: i32,
    pub grand_prix: String,
    pub predicted_winner: String,
    pub laps: usize,
    pub drivers_seen: usize,
    pub drivers_qualified: usize,
    pub ranking: Vec<RankedDriver>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedDriver {
    pub position: usize,
    pub driver: String,
    pub score: f64,
    pub mean_lap: f64,
    pub std_dev: f64,
    pub fastest_lap: f64,
    pub laps: usize,
}

impl PredictionReport {
    fn new(request: &PredictionRequest, prediction: Prediction) -> Self {
        let ranking = prediction
            .ranking
            .into_iter()
            .enumerate()
            .map(|(ix, scored)| RankedDriver {
                position: ix + 1,
                driver: scored.driver.to_string(),
                score: scored.score,
                mean_lap: scored.stats.mean,
                std_dev: scored.stats.std_dev,
                fastest_lap: scored.stats.fastest,
                laps: scored.stats.laps,
            })
            .collect();

        Self {
            year: request.year,
            grand_prix: request.grand_prix.clone(),
            predicted_winner: prediction.winner.to_string(),
            laps: prediction.summary.laps,
            drivers_seen: prediction.summary.drivers_seen,
            drivers_qualified: prediction.summary.drivers_qualified,
            ranking,
        }
    }
}

impl From<&PredictionReport> for PredictionResponse {
    fn from(report: &PredictionReport) -> Self {
        Self {
            predicted_winner: report.predicted_winner.clone(),
        }
    }
}

/// Status class of a failed request, mirroring HTTP semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    BadRequest,
    Internal,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::BadRequest => 400,
            Status::Internal => 500,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error(transparent)]
    Session(#[from] session::Error),

    #[error("cannot predict: {0}")]
    Prediction(#[from] engine::Error),

    #[error("prediction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl HandlerError {
    pub fn status(&self) -> Status {
        match self {
            HandlerError::InvalidRequest(_) | HandlerError::Session(_) => Status::BadRequest,
            HandlerError::Prediction(err) if err.is_client_error() => Status::BadRequest,
            HandlerError::Prediction(_) | HandlerError::Task(_) => Status::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.status() {
            Status::BadRequest => 2,
            Status::Internal => 1,
        }
    }
}

pub struct RequestHandler {
    provider: Box<dyn SessionProvider>,
    predictor: Box<dyn Predictor>,
}

impl RequestHandler {
    pub fn new(provider: Box<dyn SessionProvider>, predictor: Box<dyn Predictor>) -> Self {
        Self {
            provider,
            predictor,
        }
    }

    pub fn handle(&self, request: &PredictionRequest) -> Result<PredictionReport, HandlerError> {
        if request.grand_prix.trim().is_empty() {
            return Err(HandlerError::InvalidRequest("grand prix name is empty"));
        }

        let laps = self
            .provider
            .fetch_session(request.year, &request.grand_prix)
            .inspect_err(|err| warn!(error = %err, ?request, "session unavailable"))?;
        let prediction = self
            .predictor
            .predict(&laps)
            .inspect_err(|err| warn!(error = %err, ?request, "prediction failed"))?;

        info!(
            year = request.year,
            grand_prix = %request.grand_prix,
            winner = %prediction.winner,
            "race predicted"
        );
        Ok(PredictionReport::new(request, prediction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{DriverId, LapDataset, LapRecord, StatisticalPredictor, Statistic};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    struct FixedProvider(LapDataset);

    impl SessionProvider for FixedProvider {
        fn fetch_session(&self, season: i32, race: &str) -> Result<LapDataset, session::Error> {
            if race == "Monaco Grand Prix" {
                Ok(self.0.clone())
            } else {
                Err(session::Error::SessionNotFound {
                    season,
                    race: race.to_owned(),
                })
            }
        }
    }

    fn handler(laps: &[(&str, f64)]) -> RequestHandler {
        let laps = laps
            .iter()
            .map(|(driver, secs)| {
                LapRecord::timed(DriverId::new(*driver).unwrap(), Duration::from_secs_f64(*secs))
            })
            .collect();
        RequestHandler::new(
            Box::new(FixedProvider(laps)),
            Box::new(StatisticalPredictor::new()),
        )
    }

    fn request(grand_prix: &str) -> PredictionRequest {
        PredictionRequest {
            year: 2023,
            grand_prix: grand_prix.into(),
        }
    }

    #[test]
    fn predicts_from_provider_data() {
        let handler = handler(&[
            ("LEC", 74.1),
            ("LEC", 74.3),
            ("LEC", 74.2),
            ("SAI", 75.0),
            ("SAI", 74.0),
            ("SAI", 76.0),
        ]);

        let report = handler.handle(&request("Monaco Grand Prix")).unwrap();
        assert_eq!(report.predicted_winner, "LEC");
        assert_eq!(report.ranking.len(), 2);
        assert_eq!(report.ranking[0].position, 1);
        assert_eq!(
            PredictionResponse::from(&report),
            PredictionResponse {
                predicted_winner: "LEC".into()
            }
        );
    }

    #[test]
    fn unknown_race_is_bad_request() {
        let err = handler(&[]).handle(&request("Atlantis")).unwrap_err();
        assert_eq!(err.status(), Status::BadRequest);
        assert_eq!(err.status().code(), 400);
    }

    #[test]
    fn blank_race_is_bad_request() {
        let err = handler(&[]).handle(&request("  ")).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidRequest(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_session_is_bad_request() {
        let err = handler(&[]).handle(&request("Monaco Grand Prix")).unwrap_err();
        assert!(matches!(
            err,
            HandlerError::Prediction(engine::Error::EmptyDataset)
        ));
        assert_eq!(err.status(), Status::BadRequest);
    }

    #[test]
    fn degenerate_statistics_are_internal() {
        let err = HandlerError::from(engine::Error::DegenerateStatistics {
            driver: DriverId::new("LEC").unwrap(),
            statistic: Statistic::StdDev,
        });
        assert_eq!(err.status(), Status::Internal);
        assert_eq!(err.status().code(), 500);
        assert_eq!(err.exit_code(), 1);
    }
}
