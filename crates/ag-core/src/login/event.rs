use crate::auth::AuthToken;

/// Events that drive the login flow.
///
/// User intents, connectivity emissions and attempt resolutions all enter
/// the state machine through this single type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    /// Username field edited.
    UsernameChanged(String),
    /// Password field edited.
    PasswordChanged(String),
    /// Remember-me checkbox toggled.
    RememberMeChanged(bool),
    /// Connectivity signal emission.
    ConnectivityChanged { online: bool },
    /// A persisted token was found at startup. Only the checkbox reflects
    /// the prior opt-in; the token itself never re-enters the flow.
    StoredTokenDetected,
    /// User pressed the login button.
    SubmitRequested,
    /// The in-flight attempt resolved with a token.
    AttemptSucceeded { token: AuthToken },
    /// The in-flight attempt resolved with a failure.
    AttemptFailed { message: String },
    /// UI dismissed the error text.
    ErrorCleared,
    /// UI acted on the pending navigation signal.
    NavigationConsumed,
}
