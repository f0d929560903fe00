//! Login state machine.
//!
//! Defines a pure state transition function for the login flow:
//! `(state, event) -> (new_state, actions)`. All I/O is expressed as
//! [`LoginAction`]s executed by the orchestrator in `ag-app`.

use crate::login::action::LoginAction;
use crate::login::event::LoginEvent;
use crate::login::state::{LoginState, NavigationEvent};

/// Consecutive failures after which the screen locks out permanently.
pub const MAX_CONSECUTIVE_FAILURES: u32 = 3;

/// Pure login state machine. No side effects.
pub struct LoginStateMachine;

impl LoginStateMachine {
    pub fn transition(mut state: LoginState, event: LoginEvent) -> (LoginState, Vec<LoginAction>) {
        match event {
            LoginEvent::UsernameChanged(value) => {
                state.username = value;
                state.recompute_button();
                (state, Vec::new())
            }
            LoginEvent::PasswordChanged(value) => {
                state.password = value;
                state.recompute_button();
                (state, Vec::new())
            }
            LoginEvent::RememberMeChanged(value) => {
                state.remember_me = value;
                state.recompute_button();
                (state, Vec::new())
            }
            LoginEvent::ConnectivityChanged { online } => {
                state.is_offline = !online;
                state.recompute_button();
                (state, Vec::new())
            }
            LoginEvent::StoredTokenDetected => {
                state.remember_me = true;
                state.recompute_button();
                (state, Vec::new())
            }
            LoginEvent::SubmitRequested => {
                // Synchronous guard: while locked out or offline the auth
                // port must not be called at all.
                if state.is_locked_out || state.is_offline || !state.is_button_enabled {
                    return (state, Vec::new());
                }
                state.is_loading = true;
                state.error_message = None;
                // Loading disables the button, so a second submit cannot
                // produce a concurrent attempt.
                state.recompute_button();
                let action = LoginAction::Authenticate {
                    username: state.username.clone(),
                    password: state.password.clone(),
                };
                (state, vec![action])
            }
            LoginEvent::AttemptSucceeded { token } => {
                if !state.is_loading {
                    return (state, Vec::new());
                }
                state.is_loading = false;
                state.error_message = None;
                state.failure_count = 0;
                state.navigation = Some(NavigationEvent::NavigateToHome);
                state.recompute_button();
                let persistence = if state.remember_me {
                    LoginAction::PersistToken { token }
                } else {
                    LoginAction::DiscardToken
                };
                (
                    state,
                    vec![
                        persistence,
                        LoginAction::EmitNavigation(NavigationEvent::NavigateToHome),
                    ],
                )
            }
            LoginEvent::AttemptFailed { message } => {
                if !state.is_loading {
                    return (state, Vec::new());
                }
                state.is_loading = false;
                state.error_message = Some(message);
                // Increment and lockout evaluation are one transition; no
                // partial state is observable between them.
                state.failure_count += 1;
                if state.failure_count >= MAX_CONSECUTIVE_FAILURES {
                    state.is_locked_out = true;
                }
                state.recompute_button();
                (state, Vec::new())
            }
            LoginEvent::ErrorCleared => {
                state.error_message = None;
                (state, Vec::new())
            }
            LoginEvent::NavigationConsumed => {
                state.navigation = None;
                (state, Vec::new())
            }
        }
    }
}
