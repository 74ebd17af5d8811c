#![forbid(unsafe_code)]

use super::DriverId;
use std::{collections::HashSet, time::Duration};

/// One timed circuit of the course by one driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapRecord {
    driver: DriverId,
    lap_time: Option<Duration>,
}

impl LapRecord {
    pub fn new(driver: DriverId, lap_time: Option<Duration>) -> Self {
        Self { driver, lap_time }
    }

    pub fn timed(driver: DriverId, lap_time: Duration) -> Self {
        Self::new(driver, Some(lap_time))
    }

    /// A lap whose duration was not measured (pit in/out, red flag, ...).
    pub fn unmeasured(driver: DriverId) -> Self {
        Self::new(driver, None)
    }

    pub fn driver(&self) -> &DriverId {
        &self.driver
    }

    pub fn lap_time(&self) -> Option<Duration> {
        self.lap_time
    }

    /// Lap duration in fractional seconds.
    pub fn lap_secs(&self) -> Option<f64> {
        self.lap_time.map(|t| t.as_secs_f64())
    }
}

/// Ordered laps of a single race session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LapDataset {
    laps: Vec<LapRecord>,
}

impl LapDataset {
    pub fn new(laps: Vec<LapRecord>) -> Self {
        Self { laps }
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LapRecord> {
        self.laps.iter()
    }

    /// Distinct drivers in order of their first lap in the dataset.
    pub fn drivers(&self) -> Vec<&DriverId> {
        let mut seen = HashSet::new();
        self.laps
            .iter()
            .map(LapRecord::driver)
            .filter(|driver| seen.insert(*driver))
            .collect()
    }
}

impl From<Vec<LapRecord>> for LapDataset {
    fn from(laps: Vec<LapRecord>) -> Self {
        Self::new(laps)
    }
}

impl FromIterator<LapRecord> for LapDataset {
    fn from_iter<I: IntoIterator<Item = LapRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LapDataset {
    type Item = &'a LapRecord;
    type IntoIter = std::slice::Iter<'a, LapRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.laps.iter()
    }
}
