use clap::Parser;
use config::Config;
use pitwall::{
    cli::{Cli, Command},
    commands,
    signals::wait_for_shutdown,
};
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::debug;
use tracing_log::AsTrace;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.log_level_filter().as_trace())
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let mut config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };
    cli.apply(&mut config);

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Command::Predict(args) => match commands::predict(&config, args, &mut stdout)? {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(err) => {
                tracing::error!(error = %err, status = err.status().code(), "prediction failed");
                writeln!(io::stderr(), "error: {err}")?;
                Ok(ExitCode::from(err.exit_code()))
            }
        },
        Command::Batch(args) => {
            let outcomes =
                commands::batch(&config, args, &mut stdout, wait_for_shutdown()).await?;
            if outcomes.iter().any(|o| o.result.is_err()) {
                Ok(ExitCode::from(2))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Command::Config => {
            commands::show_config(&config, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
