//! Application settings loaded from the environment.

use std::env;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

use crate::auth::Credentials;
use crate::client::ClientConfig;

/// Environment variable holding the J-Quants account mail address.
pub const MAIL_ADDRESS_VAR: &str = "J_QUANTS_MAIL_ADDRESS";
/// Environment variable holding the J-Quants account password.
pub const PASSWORD_VAR: &str = "J_QUANTS_PASSWORD";
/// Environment variable naming the log directory.
pub const LOG_OUTPUT_PATH_VAR: &str = "LOG_OUTPUT_PATH";
/// Environment variable overriding the token file location.
pub const TOKEN_PATH_VAR: &str = "J_QUANTS_TOKEN_PATH";

/// Settings for a J-Quants application.
///
/// Values are passed explicitly to [`Credentials`] and [`ClientConfig`]
/// rather than read from globals.
///
/// # Example
///
/// ```no_run
/// use jquants_rs::AppConfig;
///
/// let app = AppConfig::from_env();
/// let credentials = app.credentials();
/// let config = app.client_config();
/// ```
#[derive(Clone, Default)]
pub struct AppConfig {
    /// Account mail address
    pub mail_address: String,
    /// Account password
    pub password: SecretString,
    /// Directory for per-run log files; `None` logs to stdout
    pub log_output_path: Option<PathBuf>,
    /// Token file override
    pub token_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load settings from the process environment, reading a `.env` file
    /// first if one exists.
    ///
    /// Missing credentials are not an error here; they are only needed when
    /// a new refresh token has to be issued.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Failed to load .env file"),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            mail_address: non_empty(MAIL_ADDRESS_VAR).unwrap_or_default(),
            password: SecretString::from(non_empty(PASSWORD_VAR).unwrap_or_default()),
            log_output_path: non_empty(LOG_OUTPUT_PATH_VAR).map(PathBuf::from),
            token_path: non_empty(TOKEN_PATH_VAR).map(PathBuf::from),
        }
    }

    /// Credentials for token issuance.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.mail_address.clone(), self.password.expose_secret())
    }

    /// Client configuration with the token path override applied.
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::default();
        match &self.token_path {
            Some(path) => config.with_token_path(path),
            None => config,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mail_address", &self.mail_address)
            .field("password", &"[REDACTED]")
            .field("log_output_path", &self.log_output_path)
            .field("token_path", &self.token_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let app = AppConfig::from_lookup(lookup(&[
            (MAIL_ADDRESS_VAR, "user@example.com"),
            (PASSWORD_VAR, "secret"),
            (LOG_OUTPUT_PATH_VAR, "/tmp/logs"),
        ]));

        assert_eq!(app.mail_address, "user@example.com");
        assert_eq!(app.password.expose_secret(), "secret");
        assert_eq!(app.log_output_path, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(app.token_path, None);
        assert!(!app.credentials().is_incomplete());
        assert_eq!(app.client_config().token_path, PathBuf::from("tokens.json"));
        assert!(!format!("{:?}", app).contains("secret"));
    }

    #[test]
    fn test_password_is_held_as_secret() {
        let app = AppConfig::from_lookup(lookup(&[(PASSWORD_VAR, "hunter2")]));

        assert!(!format!("{:?}", app.password).contains("hunter2"));
        assert!(!format!("{:?}", app.clone()).contains("hunter2"));
        assert_eq!(app.password.expose_secret(), "hunter2");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let app = AppConfig::from_lookup(lookup(&[
            (LOG_OUTPUT_PATH_VAR, ""),
            (TOKEN_PATH_VAR, "/var/lib/jquants/tokens.json"),
        ]));

        assert_eq!(app.log_output_path, None);
        assert!(app.credentials().is_incomplete());
        assert_eq!(
            app.client_config().token_path,
            PathBuf::from("/var/lib/jquants/tokens.json")
        );
    }
}
