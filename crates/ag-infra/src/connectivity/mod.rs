//! Connectivity adapters.

use tokio::sync::watch;

use ag_core::ports::ConnectivityPort;

/// Connectivity monitor backed by a watch channel.
///
/// A platform build feeds `set_online` from the OS network callbacks; tests
/// and demos drive it by hand. Subscribers see the current value
/// immediately and every transition afterwards.
pub struct ChannelConnectivityMonitor {
    tx: watch::Sender<bool>,
}

impl ChannelConnectivityMonitor {
    pub fn new(online: bool) -> Self {
        let (tx, _rx) = watch::channel(online);
        Self { tx }
    }

    pub fn set_online(&self, online: bool) {
        self.tx.send_replace(online);
    }

    pub fn is_online(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for ChannelConnectivityMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConnectivityPort for ChannelConnectivityMonitor {
    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}
