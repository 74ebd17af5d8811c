#![forbid(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no session data for {race} {season}")]
    SessionNotFound { season: i32, race: String },

    #[error("session `{session}` is not a race session")]
    NotARace { session: String },

    #[error("invalid lap at index {index}: {reason}")]
    InvalidLap { index: usize, reason: &'static str },

    #[error("session store not found: {0}")]
    StoreNotFound(PathBuf),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to read session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse session file: {0}")]
    Json(#[from] serde_json::Error),
}
