#![forbid(unsafe_code)]

//! Per-driver aggregation of lap times.

use crate::domain::{DriverId, DriverStats, LapDataset, Standings};
use crate::error::Error;
use std::collections::HashMap;
use tracing::trace;

/// Valid laps a driver needs before they are considered at all.
pub const MIN_VALID_LAPS: usize = 3;

/// Group `laps` by driver and summarize every driver with at least
/// [`MIN_VALID_LAPS`] measured laps.
///
/// Laps without a measured duration are discarded before counting. Drivers
/// below the threshold are left out of the result; that is not an error.
pub fn aggregate(laps: &LapDataset) -> Result<Standings, Error> {
    if laps.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut groups: Vec<(&DriverId, Vec<u128>)> = Vec::new();
    let mut index: HashMap<&DriverId, usize> = HashMap::new();
    for lap in laps {
        let ix = *index.entry(lap.driver()).or_insert_with(|| {
            groups.push((lap.driver(), Vec::new()));
            groups.len() - 1
        });
        if let Some(time) = lap.lap_time() {
            groups[ix].1.push(time.as_nanos());
        }
    }

    let mut standings = Standings::for_dataset(laps.len(), groups.len());
    for (driver, times) in groups {
        if times.len() < MIN_VALID_LAPS {
            trace!(%driver, valid_laps = times.len(), "driver excluded");
            continue;
        }
        let stats = summarize(driver, &times)?;
        standings.insert(driver.clone(), stats);
    }

    Ok(standings)
}

const NANOS_PER_SEC: f64 = 1e9;

/// Statistics over lap times in integer nanoseconds. Sums and the variance
/// numerator are exact, so identical laps give a standard deviation of
/// exactly zero.
fn summarize(driver: &DriverId, times: &[u128]) -> Result<DriverStats, Error> {
    let insufficient = || Error::InsufficientData {
        driver: driver.clone(),
        valid_laps: times.len(),
    };
    // sample standard deviation needs n - 1 > 0
    if times.len() < 2 {
        return Err(insufficient());
    }

    let n = times.len() as u128;
    let mut sum: u128 = 0;
    let mut sum_sq: u128 = 0;
    for &t in times {
        sum = sum.checked_add(t).ok_or_else(insufficient)?;
        sum_sq = t
            .checked_mul(t)
            .and_then(|sq| sum_sq.checked_add(sq))
            .ok_or_else(insufficient)?;
    }
    // n * sum(x^2) - sum(x)^2 == n * (n - 1) * sample variance
    let spread = n
        .checked_mul(sum_sq)
        .zip(sum.checked_mul(sum))
        .map(|(a, b)| a.saturating_sub(b))
        .ok_or_else(insufficient)?;
    let fastest = times.iter().copied().min().ok_or_else(insufficient)?;

    let n = n as f64;
    let mean = sum as f64 / n / NANOS_PER_SEC;
    let std_dev = (spread as f64 / (n * (n - 1.0))).sqrt() / NANOS_PER_SEC;
    let fastest = fastest as f64 / NANOS_PER_SEC;

    if !(mean.is_finite() && std_dev.is_finite() && fastest.is_finite()) {
        return Err(insufficient());
    }

    Ok(DriverStats {
        mean,
        std_dev,
        fastest,
        laps: times.len(),
    })
}
