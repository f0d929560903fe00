//! Login view model.
//!
//! Owns the [`LoginState`] record, dispatches intents through the pure
//! state machine, and executes the resulting actions against the ports.
//! State is published through a watch channel: UI layers read the current
//! snapshot or subscribe for changes, decoupled from any UI framework.

use std::sync::{Arc, Mutex, Weak};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use ag_core::login::{LoginAction, LoginEvent, LoginState, LoginStateMachine, NavigationEvent};
use ag_core::ports::{AuthPort, ConnectivityPort, TokenStorePort};

/// View model for the login screen.
///
/// All intents run on the caller's task and mutate state synchronously;
/// the connectivity listener and attempt resolutions funnel through the
/// same watch sender, which serializes every transition. Must be created
/// inside a tokio runtime.
pub struct LoginViewModel {
    shared: Arc<LoginShared>,
    network_task: JoinHandle<()>,
    probe_task: JoinHandle<()>,
    navigation_rx: Mutex<Option<mpsc::UnboundedReceiver<NavigationEvent>>>,
}

struct LoginShared {
    auth: Arc<dyn AuthPort>,
    token_store: Arc<dyn TokenStorePort>,
    state_tx: watch::Sender<LoginState>,
    navigation_tx: mpsc::UnboundedSender<NavigationEvent>,
    // Attempt tasks hold this instead of a strong reference, so a
    // resolution landing after the screen is gone is discarded.
    weak: Weak<LoginShared>,
}

impl LoginViewModel {
    pub fn new(
        auth: Arc<dyn AuthPort>,
        connectivity: Arc<dyn ConnectivityPort>,
        token_store: Arc<dyn TokenStorePort>,
    ) -> Self {
        let mut network_rx = connectivity.subscribe();
        let online = *network_rx.borrow_and_update();

        let (navigation_tx, navigation_rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(LoginState::initial(online));

        let shared = Arc::new_cyclic(|weak| LoginShared {
            auth,
            token_store,
            state_tx,
            navigation_tx,
            weak: weak.clone(),
        });

        let network_task = {
            let weak = Arc::downgrade(&shared);
            tokio::spawn(async move {
                while network_rx.changed().await.is_ok() {
                    let online = *network_rx.borrow_and_update();
                    let Some(shared) = weak.upgrade() else { break };
                    shared.dispatch(LoginEvent::ConnectivityChanged { online });
                }
            })
        };

        // Startup probe: a persisted token only pre-ticks the remember-me
        // checkbox, it is never restored into the password flow.
        let probe_task = {
            let weak = Arc::downgrade(&shared);
            let store = Arc::clone(&shared.token_store);
            tokio::spawn(async move {
                match store.get().await {
                    Ok(Some(_)) => {
                        if let Some(shared) = weak.upgrade() {
                            shared.dispatch(LoginEvent::StoredTokenDetected);
                        }
                    }
                    Ok(None) => {}
                    Err(err) => warn!(error = %err, "token store probe failed"),
                }
            })
        };

        Self {
            shared,
            network_task,
            probe_task,
            navigation_rx: Mutex::new(Some(navigation_rx)),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoginState {
        self.shared.state_tx.borrow().clone()
    }

    /// Observe every state change; the receiver holds the current value.
    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.shared.state_tx.subscribe()
    }

    /// Single-consumer navigation channel. Returns `None` after the first
    /// call; the receiver drains one event per delivered signal, so a
    /// consumed event is never re-delivered.
    pub fn navigation_events(&self) -> Option<mpsc::UnboundedReceiver<NavigationEvent>> {
        self.navigation_rx.lock().unwrap().take()
    }

    pub fn update_username(&self, value: impl Into<String>) {
        self.shared.dispatch(LoginEvent::UsernameChanged(value.into()));
    }

    pub fn update_password(&self, value: impl Into<String>) {
        self.shared.dispatch(LoginEvent::PasswordChanged(value.into()));
    }

    pub fn update_remember_me(&self, value: bool) {
        self.shared.dispatch(LoginEvent::RememberMeChanged(value));
    }

    pub fn clear_error(&self) {
        self.shared.dispatch(LoginEvent::ErrorCleared);
    }

    pub fn clear_navigation_event(&self) {
        self.shared.dispatch(LoginEvent::NavigationConsumed);
    }

    /// Start a login attempt.
    ///
    /// Returns the handle of the spawned attempt so callers may await or
    /// abort it, or `None` when the guard rejected the submit (locked out,
    /// offline, button disabled, or an attempt already in flight). The
    /// guard and the loading-flag set happen inside one state transition,
    /// so at most one attempt can ever be in flight.
    pub fn login(&self) -> Option<JoinHandle<()>> {
        self.shared.dispatch(LoginEvent::SubmitRequested)
    }
}

impl Drop for LoginViewModel {
    fn drop(&mut self) {
        // Release the connectivity subscription and the startup probe on
        // every exit path.
        self.network_task.abort();
        self.probe_task.abort();
    }
}

impl LoginShared {
    /// Run the pure transition for `event` and hand back its actions.
    ///
    /// `send_modify` holds the watch lock for the whole transition, so no
    /// other dispatch can observe a partial state.
    fn apply(&self, event: LoginEvent) -> Vec<LoginAction> {
        let mut actions = Vec::new();
        self.state_tx.send_modify(|state| {
            let (next, produced) = LoginStateMachine::transition(state.clone(), event);
            *state = next;
            actions = produced;
        });
        actions
    }

    /// Apply `event` and execute its actions. An `Authenticate` action
    /// spawns the attempt task and its handle is returned.
    fn dispatch(&self, event: LoginEvent) -> Option<JoinHandle<()>> {
        let mut attempt = None;
        for action in self.apply(event) {
            match action {
                LoginAction::Authenticate { username, password } => {
                    attempt = Some(self.spawn_attempt(username, password));
                }
                other => {
                    // Today only `SubmitRequested` produces an action here,
                    // and resolution actions run ordered inside the attempt
                    // task. This arm only keeps dispatch total; anything
                    // landing in it runs spawned and unordered.
                    if let Some(shared) = self.weak.upgrade() {
                        tokio::spawn(async move { shared.run_effect(other).await });
                    }
                }
            }
        }
        attempt
    }

    fn spawn_attempt(&self, username: String, password: String) -> JoinHandle<()> {
        info!("starting login attempt");
        let weak = Weak::clone(&self.weak);
        let auth = Arc::clone(&self.auth);
        tokio::spawn(async move {
            let outcome = auth.login(&username, &password).await;

            let Some(shared) = weak.upgrade() else {
                debug!("login attempt resolved after the view model was dropped");
                return;
            };

            let event = match outcome {
                Ok(token) => {
                    info!("login attempt succeeded");
                    LoginEvent::AttemptSucceeded { token }
                }
                Err(err) => {
                    debug!(error = %err, "login attempt failed");
                    LoginEvent::AttemptFailed {
                        message: err.to_string(),
                    }
                }
            };

            let actions = shared.apply(event);
            {
                let state = shared.state_tx.borrow();
                if state.is_locked_out {
                    warn!(
                        failures = state.failure_count,
                        "login locked out after repeated failures"
                    );
                }
            }
            for action in actions {
                shared.run_effect(action).await;
            }
        })
    }

    async fn run_effect(&self, action: LoginAction) {
        match action {
            // Handled in dispatch; a resolution never re-authenticates.
            LoginAction::Authenticate { .. } => {}
            LoginAction::PersistToken { token } => {
                // Storage failures do not fail the login; they only lose
                // the remember-me convenience.
                if let Err(err) = self.token_store.save(&token).await {
                    warn!(error = %err, "failed to persist auth token");
                }
            }
            LoginAction::DiscardToken => {
                if let Err(err) = self.token_store.clear().await {
                    warn!(error = %err, "failed to clear stored auth token");
                }
            }
            LoginAction::EmitNavigation(event) => {
                let _ = self.navigation_tx.send(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use ag_core::auth::AuthToken;
    use ag_infra::{ChannelConnectivityMonitor, FixedCredentialAuthenticator, MemoryTokenStore};

    fn view_model_with(
        monitor: &Arc<ChannelConnectivityMonitor>,
        store: &Arc<MemoryTokenStore>,
    ) -> LoginViewModel {
        let auth = Arc::new(
            FixedCredentialAuthenticator::default().with_delay(Duration::from_millis(0)),
        );
        LoginViewModel::new(auth, Arc::clone(monitor) as _, Arc::clone(store) as _)
    }

    #[tokio::test]
    async fn successful_login_navigates_home() {
        let monitor = Arc::new(ChannelConnectivityMonitor::new(true));
        let store = Arc::new(MemoryTokenStore::default());
        let vm = view_model_with(&monitor, &store);
        let mut navigation = vm.navigation_events().unwrap();

        vm.update_username("user");
        vm.update_password("password");
        assert!(vm.state().is_button_enabled);

        vm.login().expect("guard should pass").await.unwrap();

        let state = vm.state();
        assert_eq!(state.navigation, Some(NavigationEvent::NavigateToHome));
        assert!(state.error_message.is_none());
        assert_eq!(state.failure_count, 0);
        assert_eq!(
            navigation.recv().await,
            Some(NavigationEvent::NavigateToHome)
        );
    }

    #[tokio::test]
    async fn offline_view_model_rejects_login_synchronously() {
        let monitor = Arc::new(ChannelConnectivityMonitor::new(false));
        let store = Arc::new(MemoryTokenStore::default());
        let vm = view_model_with(&monitor, &store);

        vm.update_username("user");
        vm.update_password("password");

        let state = vm.state();
        assert!(state.is_offline);
        assert!(!state.is_button_enabled);
        assert!(vm.login().is_none());
    }

    #[tokio::test]
    async fn connectivity_transitions_flow_into_state() {
        let monitor = Arc::new(ChannelConnectivityMonitor::new(true));
        let store = Arc::new(MemoryTokenStore::default());
        let vm = view_model_with(&monitor, &store);
        let mut rx = vm.subscribe();

        monitor.set_online(false);
        rx.wait_for(|state| state.is_offline).await.unwrap();

        monitor.set_online(true);
        rx.wait_for(|state| !state.is_offline).await.unwrap();
    }

    #[tokio::test]
    async fn stored_token_preticks_remember_me() {
        let monitor = Arc::new(ChannelConnectivityMonitor::new(true));
        let store = Arc::new(MemoryTokenStore::new(Some(AuthToken::new("old"))));
        let vm = view_model_with(&monitor, &store);
        let mut rx = vm.subscribe();

        rx.wait_for(|state| state.remember_me).await.unwrap();
        assert!(vm.state().password.is_empty());
    }
}
