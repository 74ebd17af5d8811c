#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Provider {
    /// Root of the session store, `<data_dir>/<season>/<race>.json`.
    pub data_dir: PathBuf,
}

impl Default for Provider {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("sessions"),
        }
    }
}
