//! Token pair and its on-disk store.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Lease of a refresh token issued by `/token/auth_user`.
pub const REFRESH_TOKEN_LIFETIME: Duration = Duration::days(7);

/// Lease of an ID token issued by `/token/auth_refresh`.
pub const ID_TOKEN_LIFETIME: Duration = Duration::hours(24);

/// The refresh token and ID (access) token with their expiries.
///
/// A default pair is empty: both tokens are blank and both expiries sit at
/// the Unix epoch, so every validity check fails.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialPair {
    /// Long-lived refresh token
    pub refresh_token: String,
    /// When the refresh token stops being accepted
    #[serde(rename = "refresh_token_expiry")]
    pub refresh_expiry: DateTime<Utc>,
    /// Short-lived ID token sent as the bearer credential
    #[serde(rename = "id_token")]
    pub access_token: String,
    /// When the ID token stops being accepted
    #[serde(rename = "id_token_expiry")]
    pub access_expiry: DateTime<Utc>,
}

impl CredentialPair {
    /// Returns `true` if the refresh token is missing or expires within `threshold` of `now`.
    pub fn refresh_expiring(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        is_expiring(&self.refresh_token, self.refresh_expiry, now, threshold)
    }

    /// Returns `true` if the ID token is missing or expires within `threshold` of `now`.
    pub fn access_expiring(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        is_expiring(&self.access_token, self.access_expiry, now, threshold)
    }
}

fn is_expiring(token: &str, expiry: DateTime<Utc>, now: DateTime<Utc>, threshold: Duration) -> bool {
    token.is_empty() || now + threshold >= expiry
}

impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("refresh_token", &"[REDACTED]")
            .field("refresh_expiry", &self.refresh_expiry)
            .field("access_token", &"[REDACTED]")
            .field("access_expiry", &self.access_expiry)
            .finish()
    }
}

/// JSON file holding a [`CredentialPair`] between runs.
///
/// Writes truncate and overwrite the file in place. There is no locking, so
/// two processes sharing one file can clobber each other's last write.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored pair.
    ///
    /// A missing file yields an empty pair. An unreadable or malformed file
    /// is an error.
    pub fn load(&self) -> Result<CredentialPair> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(CredentialPair::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the file with `pair`, creating it owner-readable only.
    pub fn save(&self, pair: &CredentialPair) -> Result<()> {
        let json = serde_json::to_vec_pretty(pair)?;

        let mut opts = OpenOptions::new();
        opts.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o600);
        }

        let mut file = opts.open(&self.path)?;

        // mode() only applies on creation
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(&json)?;
        file.sync_all()?;
        Ok(())
    }
}
