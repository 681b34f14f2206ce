//! HTTP client implementation for the J-Quants API.

use reqwest::StatusCode;
use tracing::debug;

use crate::api::{PricesService, StatementsService};
use crate::auth::{CredentialManager, Credentials};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::paginated::FetchRequest;

/// The main client for interacting with the J-Quants API.
///
/// The client owns a [`CredentialManager`] and makes sure the ID token is
/// valid before every request, including each page of a paginated fetch.
/// All request methods take `&mut self`: one client serves one caller at a
/// time.
///
/// # Example
///
/// ```no_run
/// use jquants_rs::{ClientConfig, Credentials, JQuantsClient};
/// use jquants_rs::api::DailyQuotesQuery;
///
/// # async fn example() -> jquants_rs::Result<()> {
/// let mut client = JQuantsClient::login(
///     Credentials::new("user@example.com", "password"),
///     ClientConfig::default(),
/// ).await?;
///
/// let query = DailyQuotesQuery::default()
///     .code("4478")
///     .from("20220101")
///     .to("20221230");
/// let quotes = client.prices().daily_quotes(&query).await?;
/// println!("{} quotes", quotes.len());
/// # Ok(())
/// # }
/// ```
pub struct JQuantsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: CredentialManager,
    pub(crate) config: ClientConfig,
}

impl JQuantsClient {
    /// Create a client and make sure it holds valid tokens.
    ///
    /// Stored tokens are reused when still valid; otherwise they are
    /// renewed with `credentials`.
    pub async fn login(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut client = Self::with_config(credentials, config)?;
        client.ensure_valid().await?;
        tracing::info!("J-Quants client ready");
        Ok(client)
    }

    /// Create a client without touching the network.
    ///
    /// Tokens are loaded from the configured store and renewed lazily on
    /// the first request.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let credentials = CredentialManager::new(http.clone(), credentials, &config);

        Ok(Self {
            http,
            credentials,
            config,
        })
    }

    /// Get the daily prices service.
    pub fn prices(&mut self) -> PricesService<'_> {
        PricesService::new(self)
    }

    /// Get the financial statements service.
    pub fn statements(&mut self) -> StatementsService<'_> {
        StatementsService::new(self)
    }

    /// Renew the refresh and ID tokens if they are missing or expiring.
    pub async fn ensure_valid(&mut self) -> Result<()> {
        self.credentials.ensure_valid().await
    }

    /// Get the credential manager.
    pub fn credentials(&self) -> &CredentialManager {
        &self.credentials
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Fetch one page of `request` and return the raw body.
    ///
    /// Tokens are validated first; the cursor, when present, is added as the
    /// configured cursor parameter.
    pub(crate) async fn get_page(
        &mut self,
        request: &FetchRequest,
        cursor: Option<&str>,
    ) -> Result<Vec<u8>> {
        self.credentials.ensure_valid().await?;

        let url = self.endpoint_url(request.path());
        let mut query: Vec<(&str, &str)> = request
            .params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if let Some(cursor) = cursor {
            query.push((self.config.cursor_param.as_str(), cursor));
        }

        debug!(url = %url, params = ?request.params(), has_cursor = cursor.is_some(), "GET page");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.credentials.access_token())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl std::fmt::Debug for JQuantsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JQuantsClient")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> JQuantsClient {
        let config = ClientConfig::default()
            .with_base_url(base_url)
            .with_token_path(std::env::temp_dir().join("jquants-rs-http-test-unused.json"));
        JQuantsClient::with_config(Credentials::new("a@b.c", "pw"), config).unwrap()
    }

    #[test]
    fn test_endpoint_url_joins_without_double_slash() {
        assert_eq!(
            client("https://api.jquants.com/v1/").endpoint_url("/prices/daily_quotes"),
            "https://api.jquants.com/v1/prices/daily_quotes"
        );
        assert_eq!(
            client("http://127.0.0.1:8080").endpoint_url("/fins/statements"),
            "http://127.0.0.1:8080/fins/statements"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ClientConfig::default().with_base_url("not a url");
        let result = JQuantsClient::with_config(Credentials::new("a@b.c", "pw"), config);
        assert!(matches!(result, Err(Error::UrlParse(_))));
    }
}
