//! elog - pipe standard input into rotating log files
//!
//! ```bash
//! # Log a build into ./logs/build-<date>.log, mirrored to the terminal
//! make 2>&1 | elog --log-path ./logs --program build --log-to-stderr
//!
//! # Warnings only, rotate at 10 MB, keep 5 files per day
//! tail -f app.out | elog --level warn --max-file-size 10000000 --max-backups 5
//! ```

use elog_cli::{Cli, CliResult, pipe_lines, spawn_stdin_reader};

use elog::{FlushDaemon, ShutdownCoordinator, global};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = cli.load_config()?;
    let logger = global::init(&config)?;
    config.log_summary();

    let shutdown = ShutdownCoordinator::new();
    let daemon = FlushDaemon::spawn_with_coordinator(
        Arc::clone(&logger),
        config.file.flush_interval(),
        shutdown.clone(),
    );

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), shutting down");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {e}");
            }
        }
    });

    let lines = spawn_stdin_reader()?;
    let piped = pipe_lines(lines, Arc::clone(&logger), cli.level, &shutdown).await;
    if let Ok(count) = &piped {
        info!("Logged {count} lines, {} dropped", logger.dropped_records());
    }

    daemon.stop().await?;
    piped.map(|_| ())
}
