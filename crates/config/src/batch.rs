#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;

const MAX_WORKERS: usize = 64;

#[serde_as]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Batch {
    /// Predictions run at the same time (clamped to 1..=64).
    pub workers: usize,

    /// Limit for a whole batch run, in seconds.
    #[serde_as(as = "serde_with::DurationSeconds")]
    pub timeout: Duration,
}

impl Default for Batch {
    fn default() -> Self {
        Self {
            workers: 4,
            timeout: Duration::from_secs(30),
        }
    }
}

impl Batch {
    pub fn clamp(self) -> Self {
        Self {
            workers: self.workers.clamp(1, MAX_WORKERS),
            ..self
        }
    }
}
