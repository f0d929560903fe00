//! Authgate application orchestration layer.
//!
//! This crate hosts the login view model: it wires the pure state machine
//! from `ag-core` to the authentication, connectivity and token-store ports.

pub mod viewmodel;

pub use viewmodel::LoginViewModel;
