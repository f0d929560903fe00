//! Authgate core domain layer.
//!
//! This crate defines the login flow domain models, the pure login state
//! machine, and the port interfaces implemented by infrastructure adapters.
//! It contains no I/O of its own.

pub mod auth;
pub mod login;
pub mod ports;

pub use auth::{AuthError, AuthToken};
pub use login::{LoginAction, LoginEvent, LoginState, LoginStateMachine, NavigationEvent};
