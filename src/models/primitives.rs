//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A listed issue code as used by the J-Quants API.
///
/// The API accepts both 4-digit codes (`"8697"`) and 5-digit codes with a
/// trailing check digit (`"86970"`), and returns the 5-digit form.
///
/// # Example
///
/// ```
/// use jquants_rs::IssueCode;
///
/// let code = IssueCode::new("8697");
/// assert_eq!(code.as_str(), "8697");
/// assert_eq!(code.to_five_digit().as_str(), "86970");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueCode(String);

impl IssueCode {
    /// Create a new issue code from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the issue code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 5-digit form; 4-digit codes get a trailing `0`.
    pub fn to_five_digit(&self) -> IssueCode {
        if self.0.len() == 4 {
            Self(format!("{}0", self.0))
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for IssueCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for IssueCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IssueCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
