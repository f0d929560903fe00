//! Authgate infrastructure adapters.
//!
//! Reference implementations of the `ag-core` ports: a fixed-credential
//! authenticator for demos and tests, a channel-backed connectivity monitor,
//! and file/in-memory token stores. Platform builds replace these with
//! bindings to the real OS APIs.

pub mod auth;
pub mod connectivity;
pub mod token_store;

pub use auth::FixedCredentialAuthenticator;
pub use connectivity::ChannelConnectivityMonitor;
pub use token_store::{FileTokenStore, MemoryTokenStore};
