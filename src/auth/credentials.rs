//! Login credentials used to issue refresh tokens.

use secrecy::{ExposeSecret, SecretString};

/// Mail address and password for the `/token/auth_user` endpoint.
///
/// The password is held as a [`SecretString`] so it never shows up in
/// `Debug` output or logs.
///
/// # Example
///
/// ```
/// use jquants_rs::Credentials;
///
/// let credentials = Credentials::new("user@example.com", "password");
/// assert_eq!(credentials.mail_address(), "user@example.com");
/// ```
#[derive(Debug)]
pub struct Credentials {
    mail_address: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials from a mail address and password.
    pub fn new(mail_address: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mail_address: mail_address.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// The registered mail address.
    pub fn mail_address(&self) -> &str {
        &self.mail_address
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Returns `true` if either the mail address or the password is missing.
    pub fn is_incomplete(&self) -> bool {
        self.mail_address.is_empty() || self.password.expose_secret().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("user@example.com", "hunter2");
        let debug_str = format!("{:?}", credentials);
        assert!(debug_str.contains("user@example.com"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_incomplete() {
        assert!(Credentials::new("", "pw").is_incomplete());
        assert!(Credentials::new("user@example.com", "").is_incomplete());
        assert!(!Credentials::new("user@example.com", "pw").is_incomplete());
    }
}
