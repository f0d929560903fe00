//! View models.

mod login;

pub use login::LoginViewModel;
