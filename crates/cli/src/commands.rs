//! Command implementations, writing their results to `out`.

use crate::batch::{self, BatchOutcome};
use crate::cli::{BatchArgs, PredictArgs};
use crate::error::Error;
use crate::handler::{HandlerError, PredictionRequest, RequestHandler};
use crate::report::{write_batch, write_report};
use config::Config;
use engine::StatisticalPredictor;
use session::{FileSessionProvider, SessionStore};
use std::{future::Future, io::Write, sync::Arc};
use tracing::debug;

/// Wire the configured session store to the statistical predictor.
pub fn build_handler(store: SessionStore) -> RequestHandler {
    RequestHandler::new(
        Box::new(FileSessionProvider::new(store)),
        Box::new(StatisticalPredictor::new()),
    )
}

/// Outcome of `predict`: an unusable session store or output is fatal,
/// request errors carry a status for the exit code.
pub fn predict(
    config: &Config,
    args: &PredictArgs,
    out: &mut impl Write,
) -> Result<Result<(), HandlerError>, Error> {
    let store = SessionStore::open(&config.provider.data_dir)?;
    let handler = build_handler(store);
    let request = PredictionRequest {
        year: args.season,
        grand_prix: args.race.clone(),
    };
    debug!(?request, "handling request");

    match handler.handle(&request) {
        Ok(report) => {
            write_report(out, &report, config.output.format)?;
            Ok(Ok(()))
        }
        Err(err) => Ok(Err(err)),
    }
}

/// Predict every stored race of a season. Returns the outcomes after
/// writing them.
pub async fn batch<F>(
    config: &Config,
    args: &BatchArgs,
    out: &mut impl Write,
    shutdown: F,
) -> Result<Vec<BatchOutcome>, Error>
where
    F: Future<Output = Result<(), Error>>,
{
    let store = SessionStore::open(&config.provider.data_dir)?;
    let races = store.races(args.season)?;
    debug!(season = args.season, races = races.len(), "batch discovered");

    let handler = Arc::new(build_handler(store));
    let outcomes = batch::run(handler, args.season, races, config.batch, shutdown).await?;
    write_batch(out, &outcomes, config.output.format)?;
    Ok(outcomes)
}

pub fn show_config(config: &Config, out: &mut impl Write) -> Result<(), Error> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}
