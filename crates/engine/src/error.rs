#![forbid(unsafe_code)]

use crate::domain::DriverId;
use std::fmt;

/// Every way a single prediction can fail. All variants are terminal: the
/// input is fixed, so retrying reproduces the same failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No lap records were supplied at all.
    #[error("lap dataset is empty")]
    EmptyDataset,

    /// Statistics could not be formed for a driver that passed the lap count
    /// filter. Guard against aggregation bugs; unreachable for valid input.
    #[error("cannot compute statistics for driver {driver} from {valid_laps} valid laps")]
    InsufficientData { driver: DriverId, valid_laps: usize },

    /// A qualifying driver has a zero statistic, which would divide by zero
    /// in the score formula.
    #[error("driver {driver} has a zero {statistic}, score is undefined")]
    DegenerateStatistics {
        driver: DriverId,
        statistic: Statistic,
    },

    /// Every driver was filtered out by the minimum lap count.
    #[error("none of {drivers_seen} drivers across {laps} laps completed {min_laps} valid laps")]
    NoQualifyingDrivers {
        laps: usize,
        drivers_seen: usize,
        min_laps: usize,
    },
}

/// Fieldless mirror of [`Error`] for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyDataset,
    InsufficientData,
    DegenerateStatistics,
    NoQualifyingDrivers,
}

/// Score formula term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Mean,
    StdDev,
    Fastest,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Statistic::Mean => "mean lap time",
            Statistic::StdDev => "lap time standard deviation",
            Statistic::Fastest => "fastest lap time",
        })
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyDataset => ErrorKind::EmptyDataset,
            Error::InsufficientData { .. } => ErrorKind::InsufficientData,
            Error::DegenerateStatistics { .. } => ErrorKind::DegenerateStatistics,
            Error::NoQualifyingDrivers { .. } => ErrorKind::NoQualifyingDrivers,
        }
    }

    /// Whether the failure means "cannot predict for this input" rather than
    /// an internal fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::EmptyDataset | ErrorKind::InsufficientData | ErrorKind::NoQualifyingDrivers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors() {
        let driver = DriverId::new("SAI").unwrap();
        assert!(Error::EmptyDataset.is_client_error());
        assert!(
            Error::InsufficientData {
                driver: driver.clone(),
                valid_laps: 1
            }
            .is_client_error()
        );
        assert!(
            Error::NoQualifyingDrivers {
                laps: 4,
                drivers_seen: 2,
                min_laps: 3
            }
            .is_client_error()
        );
        assert!(
            !Error::DegenerateStatistics {
                driver,
                statistic: Statistic::StdDev
            }
            .is_client_error()
        );
    }

    #[test]
    fn messages_carry_context() {
        let err = Error::DegenerateStatistics {
            driver: DriverId::new("RUS").unwrap(),
            statistic: Statistic::Fastest,
        };
        assert_eq!(
            err.to_string(),
            "driver RUS has a zero fastest lap time, score is undefined"
        );
    }
}
