use crate::{LogError, Logger, Result, ShutdownCoordinator};

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Background task that flushes a [`Logger`] on a fixed interval.
///
/// Each flush runs on the blocking pool and is awaited before the next tick
/// is taken, so flushes never overlap; a slow flush delays the following
/// one. Flush failures are reported on standard error by the logger and do
/// not stop the task. Must be spawned from within a tokio runtime.
pub struct FlushDaemon {
    coordinator: ShutdownCoordinator,
    handle: JoinHandle<()>,
}

impl FlushDaemon {
    pub fn spawn(logger: Arc<Logger>, interval: Duration) -> Self {
        Self::spawn_with_coordinator(logger, interval, ShutdownCoordinator::new())
    }

    /// Spawn a daemon that also stops when `coordinator` shuts down.
    pub fn spawn_with_coordinator(
        logger: Arc<Logger>,
        interval: Duration,
        coordinator: ShutdownCoordinator,
    ) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let handle = tokio::spawn(run(logger, interval, coordinator.clone()));

        log::debug!("Flush daemon started: interval={interval:?}");

        Self {
            coordinator,
            handle,
        }
    }

    pub fn coordinator(&self) -> &ShutdownCoordinator {
        &self.coordinator
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal shutdown and wait for the final flush.
    pub async fn stop(self) -> Result<()> {
        self.coordinator.shutdown();
        self.handle
            .await
            .map_err(|e| LogError::daemon(e.to_string()))
    }
}

async fn run(logger: Arc<Logger>, interval: Duration, coordinator: ShutdownCoordinator) {
    // Subscribe before checking the flag so a concurrent shutdown is not missed
    let mut guard = coordinator.subscribe_guard();
    let mut ticker = interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while !coordinator.is_shutdown() {
        tokio::select! {
            _ = ticker.tick() => flush(&logger).await,
            _ = guard.wait() => break,
        }
    }

    flush(&logger).await;
}

async fn flush(logger: &Arc<Logger>) {
    let logger = Arc::clone(logger);
    if let Err(e) = tokio::task::spawn_blocking(move || logger.flush()).await {
        eprintln!("Flush task failed: {e}");
    }
}
