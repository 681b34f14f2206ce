//! Daily stock prices service.

use serde::Serialize;

use crate::client::paginated::{FetchRequest, JsonPageDecoder};
use crate::client::JQuantsClient;
use crate::models::{DailyQuote, IssueCode};
use crate::Result;

const DAILY_QUOTES_PATH: &str = "/prices/daily_quotes";

/// Service for `/prices/*` endpoints.
///
/// # Example
///
/// ```no_run
/// use jquants_rs::api::DailyQuotesQuery;
///
/// # async fn example(mut client: jquants_rs::JQuantsClient) -> jquants_rs::Result<()> {
/// let query = DailyQuotesQuery::default().code("4478").from("20220101").to("20221230");
/// for quote in client.prices().daily_quotes(&query).await? {
///     println!("{}: {:?}", quote.date, quote.mid_price());
/// }
/// # Ok(())
/// # }
/// ```
pub struct PricesService<'a> {
    client: &'a mut JQuantsClient,
}

/// Filters for `/prices/daily_quotes`.
///
/// Either `code` or `date` is required by the API. `from`/`to` narrow a
/// `code` query to a date range. Dates use `YYYYMMDD` or `YYYY-MM-DD`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DailyQuotesQuery {
    /// Issue code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<IssueCode>,
    /// Start of date range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of date range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Single trading date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl DailyQuotesQuery {
    /// Filter by issue code.
    pub fn code(mut self, code: impl Into<IssueCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the start of the date range.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the end of the date range.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Filter by a single trading date.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl<'a> PricesService<'a> {
    pub(crate) fn new(client: &'a mut JQuantsClient) -> Self {
        Self { client }
    }

    /// Fetch every daily quote matching `query`, following pagination.
    pub async fn daily_quotes(&mut self, query: &DailyQuotesQuery) -> Result<Vec<DailyQuote>> {
        let request = FetchRequest::new(DAILY_QUOTES_PATH).query(query)?;
        let decoder = JsonPageDecoder::<DailyQuote>::new("daily_quotes");
        self.client.fetch_all(&request, &decoder).await
    }
}
