//! Daily stock price models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::IssueCode;

/// One row of `/prices/daily_quotes`.
///
/// Price fields are `None` on days without trades or when the API omits
/// them for the caller's subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyQuote {
    /// Trading date
    pub date: NaiveDate,
    /// Issue code (5-digit form)
    pub code: IssueCode,
    /// Opening price
    #[serde(default)]
    pub open: Option<Decimal>,
    /// High price
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Low price
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Closing price
    #[serde(default)]
    pub close: Option<Decimal>,
    /// Trading volume
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Trading value
    #[serde(default)]
    pub turnover_value: Option<Decimal>,
    /// Split/consolidation adjustment factor
    #[serde(default)]
    pub adjustment_factor: Option<Decimal>,
    /// Adjusted opening price
    #[serde(default)]
    pub adjustment_open: Option<Decimal>,
    /// Adjusted high price
    #[serde(default)]
    pub adjustment_high: Option<Decimal>,
    /// Adjusted low price
    #[serde(default)]
    pub adjustment_low: Option<Decimal>,
    /// Adjusted closing price
    #[serde(default)]
    pub adjustment_close: Option<Decimal>,
    /// Adjusted trading volume
    #[serde(default)]
    pub adjustment_volume: Option<Decimal>,
}

impl DailyQuote {
    /// Midpoint of the day's high and low.
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.high? + self.low?) / Decimal::TWO)
    }

    /// Midpoint of the adjusted high and low.
    pub fn adjusted_mid_price(&self) -> Option<Decimal> {
        Some((self.adjustment_high? + self.adjustment_low?) / Decimal::TWO)
    }
}
