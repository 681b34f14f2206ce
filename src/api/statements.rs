//! Financial statements service.

use serde::Serialize;

use crate::client::paginated::{FetchRequest, JsonPageDecoder};
use crate::client::JQuantsClient;
use crate::models::{IssueCode, Statement};
use crate::Result;

const STATEMENTS_PATH: &str = "/fins/statements";

/// Service for `/fins/statements`.
///
/// # Example
///
/// ```no_run
/// use jquants_rs::api::StatementsQuery;
/// use jquants_rs::report::statements_report;
///
/// # async fn example(mut client: jquants_rs::JQuantsClient) -> jquants_rs::Result<()> {
/// let statements = client
///     .statements()
///     .list(&StatementsQuery::default().code("86970"))
///     .await?;
/// println!("{}", statements_report(&statements));
/// # Ok(())
/// # }
/// ```
pub struct StatementsService<'a> {
    client: &'a mut JQuantsClient,
}

/// Filters for `/fins/statements`. One of `code` or `date` is required.
#[derive(Debug, Default, Clone, Serialize)]
pub struct StatementsQuery {
    /// Issue code, 4 or 5 digits (e.g. `"86970"` or `"8697"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<IssueCode>,
    /// Disclosure date (`YYYYMMDD` or `YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl StatementsQuery {
    /// Filter by issue code.
    pub fn code(mut self, code: impl Into<IssueCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Filter by disclosure date.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl<'a> StatementsService<'a> {
    pub(crate) fn new(client: &'a mut JQuantsClient) -> Self {
        Self { client }
    }

    /// Fetch every statement matching `query`, following pagination.
    pub async fn list(&mut self, query: &StatementsQuery) -> Result<Vec<Statement>> {
        let request = FetchRequest::new(STATEMENTS_PATH).query(query)?;
        let decoder = JsonPageDecoder::<Statement>::new("statements");
        self.client.fetch_all(&request, &decoder).await
    }
}
