//! Shutdown coordination.

use tokio::sync::broadcast;

/// Graceful-shutdown coordinator.
///
/// The server and any helper tasks each hold a subscription; one
/// `trigger` (from a signal or a test) stops them all. In-flight
/// dispatches finish before the server exits.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver that resolves once shutdown is triggered.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Begin shutdown. Safe to call more than once.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
