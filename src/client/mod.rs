//! HTTP client and pagination engine for the J-Quants API.
//!
//! This module provides the main entry point [`JQuantsClient`] for
//! interacting with the J-Quants API.
//!
//! # Example
//!
//! ```no_run
//! use jquants_rs::{ClientConfig, Credentials, JQuantsClient};
//! use jquants_rs::client::paginated::{FetchRequest, JsonPageDecoder};
//! use jquants_rs::models::DailyQuote;
//!
//! # async fn example() -> jquants_rs::Result<()> {
//! let mut client = JQuantsClient::with_config(
//!     Credentials::new("user@example.com", "password"),
//!     ClientConfig::default(),
//! )?;
//!
//! let request = FetchRequest::new("/prices/daily_quotes").param("date", "20240301");
//! let decoder = JsonPageDecoder::<DailyQuote>::new("daily_quotes");
//! let quotes = client.fetch_all(&request, &decoder).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_CURSOR_PARAM, DEFAULT_TOKEN_PATH};
pub use http::JQuantsClient;
pub use paginated::{FetchRequest, JsonPageDecoder, Page, PageDecoder};
