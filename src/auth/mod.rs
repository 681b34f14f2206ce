//! Authentication and token management for the J-Quants API.
//!
//! J-Quants uses a two-step token scheme:
//!
//! 1. **Refresh token** - issued by `/token/auth_user` in exchange for the
//!    registered mail address and password. Valid for about a week.
//! 2. **ID token** - issued by `/token/auth_refresh` in exchange for the
//!    refresh token. Valid for 24 hours and sent as a bearer token on every
//!    data request.
//!
//! [`CredentialManager`] renews both as needed and keeps them in a
//! [`TokenStore`] file so later runs can skip the login.
//!
//! ```no_run
//! use jquants_rs::{ClientConfig, CredentialManager, Credentials};
//!
//! # async fn example() -> jquants_rs::Result<()> {
//! let config = ClientConfig::default();
//! let mut manager = CredentialManager::new(
//!     reqwest::Client::new(),
//!     Credentials::new("user@example.com", "password"),
//!     &config,
//! );
//! manager.ensure_valid().await?;
//! println!("ID token length: {}", manager.access_token().len());
//! # Ok(())
//! # }
//! ```

mod credentials;
mod manager;
mod store;

pub use credentials::Credentials;
pub use manager::CredentialManager;
pub use store::{CredentialPair, TokenStore, ID_TOKEN_LIFETIME, REFRESH_TOKEN_LIFETIME};
