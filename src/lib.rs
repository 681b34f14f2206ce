//! # jquants-rs
//!
//! A Rust client for the J-Quants market data API.
//!
//! The API issues a long-lived refresh token from account credentials and a
//! short-lived ID token from the refresh token. Every data endpoint requires
//! a valid ID token and returns large result sets a page at a time.
//!
//! ## Features
//!
//! - **Token lifecycle**: refresh and ID tokens are renewed before they
//!   expire and persisted to a local token file
//! - **Pagination**: every page of an endpoint is fetched and concatenated,
//!   with the token checked before each page
//! - **Models**: daily quotes and financial statements, with a text report
//!   over statements
//! - **Async-first**: built on `reqwest`, one request in flight per client
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jquants_rs::{AppConfig, JQuantsClient};
//! use jquants_rs::api::DailyQuotesQuery;
//!
//! #[tokio::main]
//! async fn main() -> jquants_rs::Result<()> {
//!     let app = AppConfig::from_env();
//!     let mut client = JQuantsClient::login(app.credentials(), app.client_config()).await?;
//!
//!     let query = DailyQuotesQuery::default().code("86970").date("20230324");
//!     let quotes = client.prices().daily_quotes(&query).await?;
//!     println!("Fetched {} quotes", quotes.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Endpoints
//!
//! Any paginated endpoint can be fetched with [`client::FetchRequest`] and a
//! page decoder:
//!
//! ```rust,no_run
//! use jquants_rs::client::{FetchRequest, JsonPageDecoder};
//!
//! # async fn example(mut client: jquants_rs::JQuantsClient) -> jquants_rs::Result<()> {
//! let request = FetchRequest::new("/listed/info").param("code", "86970");
//! let decoder = JsonPageDecoder::<serde_json::Value>::new("info");
//! let rows = client.fetch_all(&request, &decoder).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;

// Re-export primary types at crate root for convenience
pub use auth::{CredentialManager, CredentialPair, Credentials, TokenStore};
pub use client::{ClientConfig, JQuantsClient};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use models::{DailyQuote, IssueCode, Statement};

/// Prelude module for convenient imports.
///
/// ```rust
/// use jquants_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{DailyQuotesQuery, StatementsQuery};
    pub use crate::auth::{CredentialPair, Credentials, TokenStore};
    pub use crate::client::{ClientConfig, FetchRequest, JQuantsClient, JsonPageDecoder, Page};
    pub use crate::config::AppConfig;
    pub use crate::error::{Error, Result};
    pub use crate::models::{DailyQuote, IssueCode, Statement};
    pub use crate::report::statements_report;
}
