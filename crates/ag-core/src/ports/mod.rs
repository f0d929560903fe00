//! Port interfaces for the application layer.
//!
//! Ports define the contract between the login flow logic and the platform
//! adapters (authentication backend, OS connectivity APIs, key-value
//! persistence). The core stays independent of any concrete implementation.

pub mod auth;
pub mod connectivity;
pub mod token_store;

pub use auth::AuthPort;
pub use connectivity::ConnectivityPort;
pub use token_store::TokenStorePort;
