//! Data models for the J-Quants API.
//!
//! - [`primitives`] - Core types like `IssueCode`
//! - [`daily_quote`] - Daily stock prices
//! - [`statement`] - Financial statement disclosures

pub mod daily_quote;
pub mod primitives;
pub mod statement;

pub use daily_quote::*;
pub use primitives::*;
pub use statement::Statement;
