//! Connectivity port - abstracts OS network monitoring.

use tokio::sync::watch;

/// Reactive "is online" signal.
///
/// The returned receiver holds the current value immediately and observes
/// every subsequent transition. The stream never completes while the
/// adapter is alive.
pub trait ConnectivityPort: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<bool>;
}
