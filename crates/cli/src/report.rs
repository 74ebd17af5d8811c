use crate::batch::BatchOutcome;
use crate::error::Error;
use crate::handler::{PredictionReport, PredictionResponse};
use config::OutputFormat;
use serde::Serialize;
use std::io::Write;

pub fn write_report(
    out: &mut impl Write,
    report: &PredictionReport,
    format: OutputFormat,
) -> Result<(), Error> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "{} {}: predicted winner {}",
                report.grand_prix, report.year, report.predicted_winner
            )?;
            writeln!(
                out,
                "{} of {} drivers qualified from {} laps",
                report.drivers_qualified, report.drivers_seen, report.laps
            )?;
            for driver in &report.ranking {
                writeln!(
                    out,
                    "{:>3}. {:<6} score {:.4}  mean {:.3}s  std {:.3}s  best {:.3}s  ({} laps)",
                    driver.position,
                    driver.driver,
                    driver.score,
                    driver.mean_lap,
                    driver.std_dev,
                    driver.fastest_lap,
                    driver.laps
                )?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct BatchLine<'a> {
    race: &'a str,
    #[serde(flatten)]
    response: Option<PredictionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

/// One line per race; failures are listed next to successes.
pub fn write_batch(
    out: &mut impl Write,
    outcomes: &[BatchOutcome],
    format: OutputFormat,
) -> Result<(), Error> {
    for outcome in outcomes {
        match format {
            OutputFormat::Json => {
                let line = match &outcome.result {
                    Ok(report) => BatchLine {
                        race: &outcome.race,
                        response: Some(PredictionResponse::from(report)),
                        error: None,
                        status: None,
                    },
                    Err(err) => BatchLine {
                        race: &outcome.race,
                        response: None,
                        error: Some(err.to_string()),
                        status: Some(err.status().code()),
                    },
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }
            OutputFormat::Text => match &outcome.result {
                Ok(report) => writeln!(out, "{:<32} {}", outcome.race, report.predicted_winner)?,
                Err(err) => writeln!(out, "{:<32} error: {err}", outcome.race)?,
            },
        }
    }
    Ok(())
}
