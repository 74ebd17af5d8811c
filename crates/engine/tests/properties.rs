#![forbid(unsafe_code)]

use engine::{DriverId, DriverStats, LapDataset, LapRecord, aggregate, predict, score};
use proptest::prelude::*;
use std::time::Duration;

prop_compose! {
    // Lap times are spread by index so no driver ends up with zero deviation.
    fn arbitrary_driver_laps()(
        base in 60.0f64..120.0,
        jitter in prop::collection::vec(0.0f64..5.0, 3..12),
    ) -> Vec<f64> {
        jitter
            .iter()
            .enumerate()
            .map(|(i, j)| base + j + i as f64 * 0.01)
            .collect()
    }
}

prop_compose! {
    fn arbitrary_session()(
        drivers in prop::collection::vec(arbitrary_driver_laps(), 1..8),
    ) -> LapDataset {
        drivers
            .into_iter()
            .enumerate()
            .flat_map(|(ix, times)| {
                let driver = DriverId::new(format!("D{ix}")).unwrap();
                times
                    .into_iter()
                    .map(move |secs| LapRecord::timed(driver.clone(), Duration::from_secs_f64(secs)))
            })
            .collect()
    }
}

prop_compose! {
    fn arbitrary_stats()(
        mean in 60.0f64..120.0,
        std_dev in 0.01f64..10.0,
        fastest in 50.0f64..120.0,
    ) -> DriverStats {
        DriverStats { mean, std_dev, fastest, laps: 3 }
    }
}

proptest! {
    #[test]
    fn winner_is_an_input_driver(laps in arbitrary_session()) {
        let winner = predict(&laps).unwrap();
        prop_assert!(laps.drivers().contains(&&winner));
    }

    #[test]
    fn prediction_is_deterministic(laps in arbitrary_session()) {
        prop_assert_eq!(predict(&laps), predict(&laps));
    }

    #[test]
    fn improving_statistics_never_lowers_score(
        stats in arbitrary_stats(),
        mean_factor in 0.5f64..=1.0,
        std_factor in 0.5f64..=1.0,
        fastest_factor in 0.5f64..=1.0,
    ) {
        let driver = DriverId::new("X").unwrap();
        let improved = DriverStats {
            mean: stats.mean * mean_factor,
            std_dev: stats.std_dev * std_factor,
            fastest: stats.fastest * fastest_factor,
            laps: stats.laps,
        };
        prop_assert!(score(&driver, &improved).unwrap() >= score(&driver, &stats).unwrap());
    }

    #[test]
    fn two_lap_driver_is_never_considered(
        laps in arbitrary_session(),
        fast in prop::collection::vec(1.0f64..10.0, 2),
    ) {
        let rocket = DriverId::new("ROCKET").unwrap();
        let with_rocket: LapDataset = laps
            .iter()
            .cloned()
            .chain(fast.iter().map(|secs| LapRecord::timed(rocket.clone(), Duration::from_secs_f64(*secs))))
            .collect();

        let standings = aggregate(&with_rocket).unwrap();
        prop_assert!(!standings.contains("ROCKET"));
        prop_assert_eq!(predict(&with_rocket), predict(&laps));
    }
}
