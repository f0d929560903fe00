use crate::auth::AuthToken;
use crate::login::state::NavigationEvent;

/// Side-effects produced by state transitions.
///
/// The state machine itself performs no I/O; the orchestrator executes
/// these against the ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    /// Call the authentication port with the captured credentials.
    Authenticate { username: String, password: String },

    /// Persist the token (remember-me opted in).
    PersistToken { token: AuthToken },

    /// Drop any stored token (remember-me opted out).
    DiscardToken,

    /// Deliver a one-shot navigation signal to the UI.
    EmitNavigation(NavigationEvent),
}
