#![forbid(unsafe_code)]

use super::Weights;
use crate::aggregate::MIN_VALID_LAPS;
use crate::domain::{DriverId, DriverStats, Standings};
use crate::error::{Error, Statistic};
use std::cmp::Ordering;
use tracing::trace;

/// Score of one qualifying driver.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDriver {
    pub driver: DriverId,
    pub score: f64,
    pub stats: DriverStats,
}

/// Outcome of scoring every qualifying driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub winner: DriverId,
    /// All scored drivers, best first. Equal scores keep dataset order.
    pub drivers: Vec<ScoredDriver>,
}

/// Combine a driver's statistics into a single comparable value, higher is
/// better.
///
/// Each term is inverted so that smaller lap times and spread score higher.
pub fn score(driver: &DriverId, stats: &DriverStats) -> Result<f64, Error> {
    let degenerate = |statistic| Error::DegenerateStatistics {
        driver: driver.clone(),
        statistic,
    };
    if stats.mean == 0.0 {
        return Err(degenerate(Statistic::Mean));
    }
    if stats.std_dev == 0.0 {
        return Err(degenerate(Statistic::StdDev));
    }
    if stats.fastest == 0.0 {
        return Err(degenerate(Statistic::Fastest));
    }

    let w = Weights::STANDARD;
    Ok(w.pace * (1.0 / stats.mean)
        + w.consistency * (1.0 / stats.std_dev)
        + w.peak * (1.0 / stats.fastest))
}

/// Score every driver in `standings` and pick the highest.
///
/// On an exact tie the driver that appeared first in the lap dataset wins.
/// Empty standings fail with the dataset size recorded in them.
pub fn select(standings: &Standings) -> Result<Ranking, Error> {
    let mut drivers = Vec::with_capacity(standings.len());
    for (driver, stats) in standings.iter() {
        let score = score(driver, stats)?;
        trace!(%driver, score, "driver scored");
        drivers.push(ScoredDriver {
            driver: driver.clone(),
            score,
            stats: *stats,
        });
    }

    // A later driver only takes the lead with a strictly greater score.
    let mut leader: Option<&ScoredDriver> = None;
    for scored in &drivers {
        if leader.is_none_or(|best| scored.score > best.score) {
            leader = Some(scored);
        }
    }
    let Some(winner) = leader.map(|s| s.driver.clone()) else {
        return Err(Error::NoQualifyingDrivers {
            laps: standings.laps_seen(),
            drivers_seen: standings.drivers_seen(),
            min_laps: MIN_VALID_LAPS,
        });
    };

    // stable sort keeps first-seen order among equal scores
    drivers.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(Ranking { winner, drivers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> DriverId {
        DriverId::new(s).unwrap()
    }

    fn stats(mean: f64, std_dev: f64, fastest: f64) -> DriverStats {
        DriverStats {
            mean,
            std_dev,
            fastest,
            laps: 3,
        }
    }

    #[test]
    fn formula_matches_weights() {
        let s = score(&id("A"), &stats(100.0, 2.0, 50.0)).unwrap();
        let expected = 0.4 * (1.0 / 100.0) + 0.3 * (1.0 / 2.0) + 0.3 * (1.0 / 50.0);
        assert_eq!(s, expected);
    }

    #[test]
    fn zero_statistics_are_degenerate() {
        let cases = [
            (stats(0.0, 1.0, 1.0), Statistic::Mean),
            (stats(1.0, 0.0, 1.0), Statistic::StdDev),
            (stats(1.0, 1.0, 0.0), Statistic::Fastest),
        ];
        for (stats, statistic) in cases {
            assert_eq!(
                score(&id("A"), &stats),
                Err(Error::DegenerateStatistics {
                    driver: id("A"),
                    statistic
                })
            );
        }
    }

    #[test]
    fn empty_standings_report_dataset_size() {
        assert_eq!(
            select(&Standings::for_dataset(5, 3)),
            Err(Error::NoQualifyingDrivers {
                laps: 5,
                drivers_seen: 3,
                min_laps: 3
            })
        );
    }

    #[test]
    fn ties_go_to_first_seen_driver() {
        let standings: Standings = [
            (id("B"), stats(90.0, 0.5, 89.0)),
            (id("A"), stats(90.0, 0.5, 89.0)),
        ]
        .into_iter()
        .collect();

        let ranking = select(&standings).unwrap();
        assert_eq!(ranking.winner, id("B"));
        let order: Vec<&str> = ranking.drivers.iter().map(|d| d.driver.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn ranking_is_sorted_best_first() {
        let standings: Standings = [
            (id("SLOW"), stats(95.0, 1.0, 94.0)),
            (id("FAST"), stats(90.0, 0.2, 89.0)),
            (id("MID"), stats(92.0, 0.5, 91.0)),
        ]
        .into_iter()
        .collect();

        let ranking = select(&standings).unwrap();
        assert_eq!(ranking.winner, id("FAST"));
        let order: Vec<&str> = ranking.drivers.iter().map(|d| d.driver.as_str()).collect();
        assert_eq!(order, vec!["FAST", "MID", "SLOW"]);
    }
}
