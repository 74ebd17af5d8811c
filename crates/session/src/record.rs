#![forbid(unsafe_code)]

use crate::Error;
use engine::{DriverId, LapDataset, LapRecord};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const RACE_SESSION: &str = "R";

/// On-disk form of one session's lap timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionFile {
    pub season: i32,
    pub event: String,
    /// Session code, `R` for the race.
    #[serde(default = "race_session")]
    pub session: String,
    pub laps: Vec<LapEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LapEntry {
    pub driver: String,
    /// Lap time in seconds. Absent for laps without a measured time.
    #[serde(default)]
    pub lap_time: Option<f64>,
}

fn race_session() -> String {
    RACE_SESSION.to_owned()
}

impl SessionFile {
    pub fn is_race(&self) -> bool {
        self.session.eq_ignore_ascii_case(RACE_SESSION)
    }

    /// Validate every lap and convert to the engine's dataset.
    pub fn into_dataset(self) -> Result<LapDataset, Error> {
        if !self.is_race() {
            return Err(Error::NotARace {
                session: self.session,
            });
        }
        self.laps
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_record(index))
            .collect()
    }
}

impl LapEntry {
    fn into_record(self, index: usize) -> Result<LapRecord, Error> {
        let invalid = |reason| Error::InvalidLap { index, reason };
        let driver = DriverId::new(self.driver).ok_or_else(|| invalid("empty driver"))?;
        let lap_time = match self.lap_time {
            None => None,
            Some(secs) if !secs.is_finite() => return Err(invalid("lap time is not finite")),
            Some(secs) if secs < 0.0 => return Err(invalid("lap time is negative")),
            Some(secs) => Some(
                Duration::try_from_secs_f64(secs).map_err(|_| invalid("lap time out of range"))?,
            ),
        };
        Ok(LapRecord::new(driver, lap_time))
    }
}
