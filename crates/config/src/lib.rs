#![forbid(unsafe_code)]

mod batch;
mod error;
mod output_format;
mod provider;

pub use batch::Batch;
pub use error::Error;
pub use output_format::OutputFormat;
pub use provider::Provider;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub provider: Provider,
    pub output: Output,
    pub batch: Batch,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Output {
    pub format: OutputFormat,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()?;
        Ok(config.normalized())
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }

    fn normalized(mut self) -> Self {
        self.batch = self.batch.clamp();
        self
    }
}
