//! API service modules for J-Quants endpoints.
//!
//! Each service borrows the client mutably for the duration of a call and
//! fetches every page of its endpoint.

mod prices;
mod statements;

pub use prices::{DailyQuotesQuery, PricesService};
pub use statements::{StatementsQuery, StatementsService};
