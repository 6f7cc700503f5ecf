use crate::ShutdownCoordinator;

use tokio::sync::broadcast;

/// Per-task handle on a [`ShutdownCoordinator`].
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Resolves on shutdown, or once every coordinator handle is gone.
    pub async fn wait(&mut self) {
        let _ = self.shutdown_rx.recv().await;
    }
}
