#![forbid(unsafe_code)]

use crate::{Error, SessionStore};
use engine::LapDataset;
use tracing::debug;

pub trait SessionProvider: Send + Sync {
    /// Lap data of the race session of `race` in `season`.
    fn fetch_session(&self, season: i32, race: &str) -> Result<LapDataset, Error>;
}

/// Provider backed by a local [`SessionStore`].
#[derive(Debug, Clone)]
pub struct FileSessionProvider {
    store: SessionStore,
}

impl FileSessionProvider {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

impl SessionProvider for FileSessionProvider {
    fn fetch_session(&self, season: i32, race: &str) -> Result<LapDataset, Error> {
        let laps = self.store.load(season, race)?.into_dataset()?;
        debug!(season, race, laps = laps.len(), "session fetched");
        Ok(laps)
    }
}
