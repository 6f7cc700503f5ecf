use crate::{CliError, CliResult, STDIN_CHANNEL_CAPACITY};

use elog::{Logger, ShutdownCoordinator};

use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use log::{Level, debug};
use tokio::sync::mpsc;

/// Read standard input line by line on a dedicated thread.
///
/// The thread is detached: a read blocked on the terminal never holds up
/// process exit. The channel closes at end of input or after a read error,
/// which is delivered as the last item.
pub fn spawn_stdin_reader() -> CliResult<mpsc::Receiver<io::Result<String>>> {
    let (tx, rx) = mpsc::channel(STDIN_CHANNEL_CAPACITY);

    thread::Builder::new()
        .name("elog-stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })
        .map_err(CliError::stdin)?;

    Ok(rx)
}

/// Log every received line at `level` until the channel closes or
/// `coordinator` shuts down. Returns the number of lines read.
///
/// Each line is written on the blocking pool, since a write may rotate files
/// under the logger lock; lines are still written one at a time, in order.
/// Lines the sink rejects are counted as dropped by the logger and do not
/// stop the pump.
pub async fn pipe_lines(
    mut lines: mpsc::Receiver<io::Result<String>>,
    logger: Arc<Logger>,
    level: Level,
    coordinator: &ShutdownCoordinator,
) -> CliResult<u64> {
    let mut guard = coordinator.subscribe_guard();
    let mut count = 0u64;

    while !coordinator.is_shutdown() {
        tokio::select! {
            line = lines.recv() => match line {
                Some(Ok(line)) => {
                    count += 1;
                    log_line(&logger, level, line).await;
                }
                Some(Err(e)) => return Err(CliError::stdin(e)),
                None => {
                    debug!("Input closed after {count} lines");
                    break;
                }
            },
            _ = guard.wait() => break,
        }
    }

    Ok(count)
}

async fn log_line(logger: &Arc<Logger>, level: Level, line: String) {
    let logger = Arc::clone(logger);
    let written =
        tokio::task::spawn_blocking(move || logger.log_at(level, format_args!("{line}"))).await;
    if let Err(e) = written {
        eprintln!("Log task failed: {e}");
    }
}
