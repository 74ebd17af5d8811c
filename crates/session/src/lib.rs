#![forbid(unsafe_code)]

//! Lap data sources for the prediction engine.

mod error;
mod provider;
mod record;
mod store;

pub use error::Error;
pub use provider::{FileSessionProvider, SessionProvider};
pub use record::{LapEntry, SessionFile};
pub use store::{SessionStore, slug};
