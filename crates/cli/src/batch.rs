//! Concurrent prediction of every stored race of a season.

use crate::error::Error;
use crate::handler::{HandlerError, PredictionReport, PredictionRequest, RequestHandler};
use config::Batch;
use std::{future::Future, sync::Arc};
use tokio::task::{JoinHandle, spawn_blocking};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct BatchOutcome {
    pub race: String,
    pub result: Result<PredictionReport, HandlerError>,
}

/// Predict `races` of `season` with `settings.workers` concurrent workers.
///
/// A failing race does not stop the batch. The whole run fails on timeout or
/// when `shutdown` resolves first. Outcomes are sorted by race.
///
/// Aborting on timeout or shutdown stops the async workers only; a
/// prediction already running on the blocking pool finishes in the
/// background and its result is discarded.
pub async fn run<F>(
    handler: Arc<RequestHandler>,
    season: i32,
    races: Vec<String>,
    settings: Batch,
    shutdown: F,
) -> Result<Vec<BatchOutcome>, Error>
where
    F: Future<Output = Result<(), Error>>,
{
    let settings = settings.clamp();
    let total = races.len();

    let (jobs_tx, jobs_rx) = flume::unbounded();
    for race in races {
        jobs_tx.send(race)?;
    }
    drop(jobs_tx);

    let (results_tx, results_rx) = flume::bounded(settings.workers);
    let workers: Vec<JoinHandle<()>> = (0..settings.workers)
        .map(|worker| {
            let jobs = jobs_rx.clone();
            let results = results_tx.clone();
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                while let Ok(race) = jobs.recv_async().await {
                    debug!(worker, %race, "predicting");
                    let request = PredictionRequest {
                        year: season,
                        grand_prix: race.clone(),
                    };
                    let handler = Arc::clone(&handler);
                    let result = spawn_blocking(move || handler.handle(&request))
                        .await
                        .unwrap_or_else(|err| Err(err.into()));
                    if results.send_async(BatchOutcome { race, result }).await.is_err() {
                        break;
                    }
                }
            })
        })
        .collect();
    drop(results_tx);

    let collect = async {
        let mut outcomes = Vec::with_capacity(total);
        while let Ok(outcome) = results_rx.recv_async().await {
            outcomes.push(outcome);
        }
        outcomes
    };

    let result = tokio::select! {
        collected = tokio::time::timeout(settings.timeout, collect) => {
            collected.map_err(|_| Error::Timeout(settings.timeout))
        }
        signalled = shutdown => {
            signalled.and(Err(Error::Cancelled))
        }
    };

    for worker in &workers {
        worker.abort();
    }

    let mut outcomes = result.inspect_err(|err| warn!(error = %err, "batch aborted"))?;
    outcomes.sort_by(|a, b| a.race.cmp(&b.race));
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(season, races = total, failed, "batch finished");
    Ok(outcomes)
}
