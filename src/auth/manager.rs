//! Refresh/ID token lifecycle for the J-Quants API.

use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::credentials::Credentials;
use super::store::{CredentialPair, TokenStore, ID_TOKEN_LIFETIME, REFRESH_TOKEN_LIFETIME};
use crate::client::ClientConfig;
use crate::{Error, Result};

/// Keeps a valid refresh token and ID token on hand.
///
/// The pair is loaded from the [`TokenStore`] at construction and written
/// back after every renewal. Renewal happens only inside
/// [`ensure_valid`](Self::ensure_valid); [`access_token`](Self::access_token)
/// just reads the current value.
///
/// Methods that renew take `&mut self`, so a single manager cannot be used
/// from two places at once.
pub struct CredentialManager {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    store: TokenStore,
    pair: CredentialPair,
    threshold: Duration,
}

impl CredentialManager {
    /// Create a manager, loading any previously stored token pair.
    ///
    /// A missing token file starts from an empty pair. A corrupt one is
    /// logged and also treated as empty.
    pub fn new(http: reqwest::Client, credentials: Credentials, config: &ClientConfig) -> Self {
        let store = TokenStore::new(&config.token_path);
        let pair = match store.load() {
            Ok(pair) => pair,
            Err(e) => {
                warn!(path = %store.path().display(), error = %e, "Ignoring unreadable token file");
                CredentialPair::default()
            }
        };

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            store,
            pair,
            threshold: config.refresh_threshold,
        }
    }

    /// Renew whichever tokens are missing or expire within the threshold.
    ///
    /// The refresh token is renewed first, since the ID token exchange needs
    /// it. When anything was renewed the pair is persisted, even if a later
    /// step failed; a failed write is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a refresh token is needed but no mail
    /// address or password was supplied, and [`Error::Authentication`] if
    /// either token endpoint fails.
    pub async fn ensure_valid(&mut self) -> Result<()> {
        let mut renewed = false;
        let result = self.renew(&mut renewed).await;

        // A refresh token issued before a failed exchange is still kept
        if renewed {
            if let Err(e) = self.store.save(&self.pair) {
                warn!(path = %self.store.path().display(), error = %e, "Failed to persist tokens");
            }
        } else if result.is_ok() {
            debug!("Tokens still valid");
        }

        result
    }

    async fn renew(&mut self, renewed: &mut bool) -> Result<()> {
        if self.pair.refresh_expiring(Utc::now(), self.threshold) {
            info!("Refresh token invalid, acquiring new one");
            let issued_at = Utc::now();
            let token = self.issue_refresh_token().await?;
            self.pair.refresh_token = token;
            self.pair.refresh_expiry = issued_at + REFRESH_TOKEN_LIFETIME;
            *renewed = true;
            info!(expires_at = %self.pair.refresh_expiry, "Acquired new refresh token");
        }

        if self.pair.access_expiring(Utc::now(), self.threshold) {
            info!("ID token invalid, acquiring new one");
            let issued_at = Utc::now();
            let token = self.exchange_refresh_token().await?;
            self.pair.access_token = token;
            self.pair.access_expiry = issued_at + ID_TOKEN_LIFETIME;
            *renewed = true;
            info!(expires_at = %self.pair.access_expiry, "Acquired new ID token");
        }

        Ok(())
    }

    /// Get the current ID token.
    ///
    /// This does not check expiry. Call [`ensure_valid`](Self::ensure_valid)
    /// first.
    pub fn access_token(&self) -> &str {
        &self.pair.access_token
    }

    /// The current token pair.
    pub fn credential_pair(&self) -> &CredentialPair {
        &self.pair
    }

    /// The store the pair is persisted to.
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    async fn issue_refresh_token(&self) -> Result<String> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct AuthUserResponse {
            refresh_token: String,
        }

        if self.credentials.is_incomplete() {
            return Err(Error::Config(
                "mail address and password are required to issue a refresh token".to_string(),
            ));
        }

        let url = format!("{}/token/auth_user", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "mailaddress": self.credentials.mail_address(),
                "password": self.credentials.password(),
            }))
            .send()
            .await
            .map_err(|e| Error::Authentication(format!("auth_user request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "failed to get refresh token: status={}, body={}",
                status.as_u16(),
                body
            )));
        }

        let parsed: AuthUserResponse = response
            .json()
            .await
            .map_err(|e| Error::Authentication(format!("invalid auth_user response: {}", e)))?;
        Ok(parsed.refresh_token)
    }

    async fn exchange_refresh_token(&self) -> Result<String> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct AuthRefreshResponse {
            id_token: String,
        }

        let url = format!("{}/token/auth_refresh", self.base_url);
        let response = self
            .http
            .post(&url)
            .query(&[("refreshtoken", self.pair.refresh_token.as_str())])
            .send()
            .await
            .map_err(|e| Error::Authentication(format!("auth_refresh request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "failed to get ID token: status={}, body={}",
                status.as_u16(),
                body
            )));
        }

        let parsed: AuthRefreshResponse = response
            .json()
            .await
            .map_err(|e| Error::Authentication(format!("invalid auth_refresh response: {}", e)))?;
        Ok(parsed.id_token)
    }
}

impl std::fmt::Debug for CredentialManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialManager")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("store", &self.store)
            .field("pair", &self.pair)
            .field("threshold", &self.threshold)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::default().with_token_path(dir.path().join("tokens.json"));
        let mut manager =
            CredentialManager::new(reqwest::Client::new(), Credentials::new("a@b.c", "pw"), &config);
        manager.pair.access_token = "super-secret-token".to_string();

        let debug_str = format!("{:?}", manager);
        assert!(!debug_str.contains("super-secret-token"));
        assert!(!debug_str.contains("\"pw\""));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_corrupt_token_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, b"garbage").unwrap();
        let config = ClientConfig::default().with_token_path(&path);

        let manager =
            CredentialManager::new(reqwest::Client::new(), Credentials::new("a@b.c", "pw"), &config);
        assert_eq!(manager.credential_pair(), &CredentialPair::default());
        assert_eq!(manager.access_token(), "");
    }

    #[tokio::test]
    async fn test_missing_credentials_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_token_path(dir.path().join("tokens.json"));
        let mut manager =
            CredentialManager::new(reqwest::Client::new(), Credentials::new("", ""), &config);

        let err = manager.ensure_valid().await.unwrap_err();
        assert!(matches!(err, Error::Config(_)), "unexpected error: {:?}", err);
    }
}
