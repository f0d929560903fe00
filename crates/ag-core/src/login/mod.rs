//! Login domain module.
//!
//! Defines the login screen state record and the pure state machine that
//! drives it.

pub mod action;
pub mod event;
pub mod state;
pub mod state_machine;

pub use action::LoginAction;
pub use event::LoginEvent;
pub use state::{LoginState, NavigationEvent};
pub use state_machine::{LoginStateMachine, MAX_CONSECUTIVE_FAILURES};
