//! Authentication adapters.

mod fixed;

pub use fixed::FixedCredentialAuthenticator;
