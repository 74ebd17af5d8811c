#![forbid(unsafe_code)]

use super::DriverId;
use std::collections::HashMap;

/// Per-driver lap time summary, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverStats {
    /// Mean lap time.
    pub mean: f64,
    /// Sample standard deviation of lap time. Lower means more consistent.
    pub std_dev: f64,
    /// Fastest lap.
    pub fastest: f64,
    /// Valid laps the statistics were computed from.
    pub laps: usize,
}

/// Qualifying drivers and their statistics, in order of first appearance in
/// the lap dataset, along with the size of that dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    entries: Vec<(DriverId, DriverStats)>,
    index: HashMap<DriverId, usize>,
    laps_seen: usize,
    drivers_seen: usize,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty standings for a dataset of `laps` laps by `drivers` drivers.
    pub fn for_dataset(laps: usize, drivers: usize) -> Self {
        Self {
            laps_seen: laps,
            drivers_seen: drivers,
            ..Self::default()
        }
    }

    /// Laps in the dataset the standings were built from, valid or not.
    pub fn laps_seen(&self) -> usize {
        self.laps_seen
    }

    /// Distinct drivers in the dataset, qualifying or not.
    pub fn drivers_seen(&self) -> usize {
        self.drivers_seen.max(self.entries.len())
    }

    /// Append a driver. A driver that is already present keeps its position
    /// and has its statistics replaced.
    pub fn insert(&mut self, driver: DriverId, stats: DriverStats) {
        if let Some(&ix) = self.index.get(&driver) {
            self.entries[ix].1 = stats;
            return;
        }
        self.index.insert(driver.clone(), self.entries.len());
        self.entries.push((driver, stats));
    }

    pub fn get(&self, driver: &str) -> Option<&DriverStats> {
        self.index.get(driver).map(|&ix| &self.entries[ix].1)
    }

    pub fn contains(&self, driver: &str) -> bool {
        self.index.contains_key(driver)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DriverId, &DriverStats)> {
        self.entries.iter().map(|(driver, stats)| (driver, stats))
    }
}

impl FromIterator<(DriverId, DriverStats)> for Standings {
    fn from_iter<I: IntoIterator<Item = (DriverId, DriverStats)>>(iter: I) -> Self {
        let mut standings = Self::new();
        for (driver, stats) in iter {
            standings.insert(driver, stats);
        }
        standings
    }
}
