use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::{Config, OutputFormat};
use std::path::{Path, PathBuf};

/// Pitwall: race winner prediction from lap timing data
///
/// Pitwall reads the lap times of a race session from a local session store,
/// summarizes every driver's pace, consistency and fastest lap, and names the
/// driver with the best combined score.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, global = true, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// Root of the session store. Overrides `provider.data_dir`.
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format: text or json. Overrides `output.format`.
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Predict the winner of one race.
    Predict(PredictArgs),

    /// Predict every stored race of a season.
    Batch(BatchArgs),

    /// Print the effective configuration.
    Config,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    /// Season (year) of the race.
    #[arg(short, long, value_parser = validate_season)]
    pub season: i32,

    /// Race name, e.g. "British Grand Prix".
    #[arg(short, long)]
    pub race: String,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// Season (year) to predict.
    #[arg(short, long, value_parser = validate_season)]
    pub season: i32,

    /// Concurrent predictions. Overrides `batch.workers`.
    #[arg(short, long)]
    pub workers: Option<usize>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.provider.data_dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Command::Batch(BatchArgs {
            workers: Some(workers),
            ..
        }) = &self.command
        {
            config.batch.workers = *workers;
            config.batch = config.batch.clamp();
        }
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

/// Validate season year
#[inline(always)]
fn validate_season(season: &str) -> Result<i32, String> {
    let season: i32 = season
        .parse()
        .map_err(|_| format!("`{season}` is not a valid season"))?;
    if (1950..=2100).contains(&season) {
        Ok(season)
    } else {
        Err("Season must be between 1950 and 2100".to_string())
    }
}
