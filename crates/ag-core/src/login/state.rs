use serde::{Deserialize, Serialize};

/// One-shot signal instructing the UI to leave the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    NavigateToHome,
}

/// Observable state of the login screen.
///
/// The record is owned by the state machine; the UI only ever sees read-only
/// snapshots of it. `is_button_enabled` is derived and never set directly by
/// an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    /// Raw username input. Only non-emptiness is ever checked.
    pub username: String,
    /// Raw password input. Only non-emptiness is ever checked.
    pub password: String,
    /// True strictly between attempt start and its resolution.
    pub is_loading: bool,
    /// User-facing failure text from the last attempt, if any.
    pub error_message: Option<String>,
    /// Derived: see [`derive_button_enabled`].
    pub is_button_enabled: bool,
    /// Consecutive failed attempts since the last success.
    pub failure_count: u32,
    /// Set once `failure_count` reaches the limit; never cleared.
    pub is_locked_out: bool,
    /// Negation of the connectivity signal's current value.
    pub is_offline: bool,
    /// User opt-in to persist the token across sessions.
    pub remember_me: bool,
    /// Pending one-shot navigation signal. The consumer clears it after
    /// acting on it; until then every state read re-delivers it.
    pub navigation: Option<NavigationEvent>,
}

impl LoginState {
    /// Initial state given the connectivity value observed at construction.
    pub fn initial(online: bool) -> Self {
        let mut state = Self {
            username: String::new(),
            password: String::new(),
            is_loading: false,
            error_message: None,
            is_button_enabled: false,
            failure_count: 0,
            is_locked_out: false,
            is_offline: !online,
            remember_me: false,
            navigation: None,
        };
        state.recompute_button();
        state
    }

    /// Re-derive `is_button_enabled` from current inputs. Idempotent.
    pub(crate) fn recompute_button(&mut self) {
        self.is_button_enabled = derive_button_enabled(self);
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::initial(true)
    }
}

/// Pure derivation of the submit button flag.
///
/// Invoked after every mutation of the state or of the connectivity input,
/// so there is no ordering dependency between the two.
pub fn derive_button_enabled(state: &LoginState) -> bool {
    !state.username.is_empty()
        && !state.password.is_empty()
        && !state.is_loading
        && !state.is_locked_out
        && !state.is_offline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_has_button_disabled() {
        let state = LoginState::initial(true);
        assert!(!state.is_button_enabled);
        assert!(!state.is_offline);
        assert_eq!(state.failure_count, 0);
        assert!(state.navigation.is_none());
    }

    #[test]
    fn initial_state_offline_mirrors_signal() {
        let state = LoginState::initial(false);
        assert!(state.is_offline);
    }

    #[test]
    fn derive_button_requires_all_five_inputs() {
        let mut state = LoginState::initial(true);
        state.username = "user".into();
        state.password = "password".into();
        assert!(derive_button_enabled(&state));

        for mutate in [
            (|s: &mut LoginState| s.username.clear()) as fn(&mut LoginState),
            |s| s.password.clear(),
            |s| s.is_loading = true,
            |s| s.is_locked_out = true,
            |s| s.is_offline = true,
        ] {
            let mut case = state.clone();
            mutate(&mut case);
            assert!(!derive_button_enabled(&case));
        }
    }
}
