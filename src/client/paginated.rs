//! Cursor-based pagination over J-Quants endpoints.
//!
//! Paginated endpoints return a slice of records plus an opaque
//! `pagination_key`. [`JQuantsClient::fetch_all`] keeps requesting pages,
//! passing the key back, until the server stops returning one, and
//! concatenates the records in the order they arrived.
//!
//! Turning a response body into a [`Page`] is the job of a
//! [`PageDecoder`]. Most endpoints share one shape and can use
//! [`JsonPageDecoder`]; any `Fn(&[u8]) -> Result<Page<T>>` closure works too.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::JQuantsClient;
use crate::{Error, Result};

/// Response field carrying the continuation cursor.
pub const PAGINATION_KEY_FIELD: &str = "pagination_key";

/// One decoded page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records in server order.
    pub records: Vec<T>,
    /// Cursor for the next page; `None` on the last page.
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Create a page. An empty cursor is treated as no cursor.
    pub fn new(records: Vec<T>, next_cursor: Option<String>) -> Self {
        Self {
            records,
            next_cursor: next_cursor.filter(|c| !c.is_empty()),
        }
    }

    /// Returns `true` if another page follows this one.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// Decodes a raw response body into a [`Page`].
pub trait PageDecoder<T> {
    /// Decode `body`, failing with [`Error::Decode`] on malformed input.
    fn decode(&self, body: &[u8]) -> Result<Page<T>>;
}

impl<T, F> PageDecoder<T> for F
where
    F: Fn(&[u8]) -> Result<Page<T>>,
{
    fn decode(&self, body: &[u8]) -> Result<Page<T>> {
        self(body)
    }
}

/// Decoder for the common `{"<records_key>": [...], "pagination_key": "..."}` shape.
///
/// # Example
///
/// ```
/// use jquants_rs::client::paginated::{JsonPageDecoder, PageDecoder};
///
/// let decoder = JsonPageDecoder::<u32>::new("values");
/// let page = decoder
///     .decode(br#"{"values": [1, 2, 3], "pagination_key": "next"}"#)
///     .unwrap();
/// assert_eq!(page.records, vec![1, 2, 3]);
/// assert_eq!(page.next_cursor.as_deref(), Some("next"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonPageDecoder<T> {
    records_key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonPageDecoder<T> {
    /// Create a decoder reading records from `records_key`.
    pub const fn new(records_key: &'static str) -> Self {
        Self {
            records_key,
            _marker: PhantomData,
        }
    }

    /// The field the records are read from.
    pub fn records_key(&self) -> &'static str {
        self.records_key
    }
}

impl<T: DeserializeOwned> PageDecoder<T> for JsonPageDecoder<T> {
    fn decode(&self, body: &[u8]) -> Result<Page<T>> {
        let mut value: Value =
            serde_json::from_slice(body).map_err(|e| Error::decode(self.records_key, e))?;

        let object = value.as_object_mut().ok_or_else(|| {
            Error::decode(self.records_key, "response body is not a JSON object")
        })?;

        let records = object.remove(self.records_key).ok_or_else(|| {
            Error::decode(self.records_key, format!("missing `{}` field", self.records_key))
        })?;
        let records: Vec<T> =
            serde_json::from_value(records).map_err(|e| Error::decode(self.records_key, e))?;

        let next_cursor = match object.remove(PAGINATION_KEY_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(key)) => Some(key),
            Some(other) => {
                return Err(Error::decode(
                    self.records_key,
                    format!("`{}` is not a string: {}", PAGINATION_KEY_FIELD, other),
                ))
            }
        };

        Ok(Page::new(records, next_cursor))
    }
}

/// An endpoint path plus the fixed filter parameters sent with every page.
///
/// Empty parameter values are dropped rather than sent as `key=`.
///
/// # Example
///
/// ```
/// use jquants_rs::client::paginated::FetchRequest;
///
/// let request = FetchRequest::new("/prices/daily_quotes")
///     .param("code", "4478")
///     .param("date", "");
/// assert_eq!(request.params().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    path: String,
    params: BTreeMap<String, String>,
}

impl FetchRequest {
    /// Create a request for `path` (relative to the API root, with a leading slash).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a filter parameter. Empty values are ignored.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.params.insert(key.into(), value);
        }
        self
    }

    /// Add every field of a serializable query struct as a parameter.
    ///
    /// `null` and empty-string fields are skipped; numbers and booleans are
    /// sent in their JSON text form.
    pub fn query<Q: Serialize>(mut self, query: &Q) -> Result<Self> {
        let value = serde_json::to_value(query)?;
        let fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Ok(self),
            other => {
                return Err(Error::InvalidInput(format!(
                    "query must serialize to an object, got {}",
                    other
                )))
            }
        };

        for (key, value) in fields {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(Error::InvalidInput(format!(
                        "query field `{}` is not a scalar: {}",
                        key, other
                    )))
                }
            };
            self = self.param(key, text);
        }
        Ok(self)
    }

    /// The endpoint path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The fixed parameters, sorted by key.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

impl JQuantsClient {
    /// Fetch every page of `request` and return all records in server order.
    ///
    /// Tokens are validated before each page, so a fetch that outlives the
    /// ID token keeps working. Any failure (transport, non-200 status, or
    /// decode) aborts the whole fetch and the records gathered so far are
    /// dropped.
    ///
    /// Without [`ClientConfig::max_pages`](super::ClientConfig::max_pages)
    /// the loop only ends when the server returns an empty cursor.
    pub async fn fetch_all<T, D>(&mut self, request: &FetchRequest, decoder: &D) -> Result<Vec<T>>
    where
        D: PageDecoder<T> + ?Sized,
    {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            if let Some(limit) = self.config.max_pages {
                if pages >= limit {
                    return Err(Error::PageLimitExceeded { limit });
                }
            }

            let body = self.get_page(request, cursor.as_deref()).await?;
            let page = decoder.decode(&body)?;
            pages += 1;

            debug!(
                path = request.path(),
                page = pages,
                records = page.records.len(),
                has_more = page.has_more(),
                "Fetched page"
            );

            records.extend(page.records);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        info!(path = request.path(), pages, records = records.len(), "Fetch complete");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Row {
        id: u32,
    }

    #[test]
    fn test_page_empty_cursor_is_last_page() {
        let page = Page::new(vec![1, 2], Some(String::new()));
        assert_eq!(page.next_cursor, None);
        assert!(!page.has_more());

        let page = Page::new(vec![3], Some("k1".to_string()));
        assert!(page.has_more());
    }

    #[test]
    fn test_json_decoder_reads_records_and_cursor() {
        let decoder = JsonPageDecoder::<Row>::new("rows");
        let page = decoder
            .decode(br#"{"rows": [{"id": 1}, {"id": 2}], "pagination_key": "abc"}"#)
            .unwrap();
        assert_eq!(page.records, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_json_decoder_without_cursor() {
        let decoder = JsonPageDecoder::<Row>::new("rows");

        let page = decoder.decode(br#"{"rows": []}"#).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.next_cursor, None);

        let page = decoder.decode(br#"{"rows": [], "pagination_key": ""}"#).unwrap();
        assert_eq!(page.next_cursor, None);

        let page = decoder.decode(br#"{"rows": [], "pagination_key": null}"#).unwrap();
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_json_decoder_rejects_malformed_bodies() {
        let decoder = JsonPageDecoder::<Row>::new("rows");

        let bodies: [&[u8]; 5] = [
            b"not json",
            br#"[1, 2, 3]"#,
            br#"{"other": []}"#,
            br#"{"rows": [{"id": "x"}]}"#,
            br#"{"rows": [], "pagination_key": 7}"#,
        ];
        for body in bodies {
            let err = decoder.decode(body).unwrap_err();
            assert!(matches!(err, Error::Decode(_)), "unexpected error: {:?}", err);
        }
    }

    #[test]
    fn test_closure_decoder() {
        let decoder = |body: &[u8]| -> Result<Page<u8>> { Ok(Page::new(body.to_vec(), None)) };
        let page = decoder.decode(b"ab").unwrap();
        assert_eq!(page.records, vec![b'a', b'b']);
    }

    #[test]
    fn test_fetch_request_drops_empty_params() {
        let request = FetchRequest::new("/fins/statements")
            .param("code", "86970")
            .param("date", "");
        assert_eq!(request.path(), "/fins/statements");
        assert_eq!(request.params().get("code").map(String::as_str), Some("86970"));
        assert!(!request.params().contains_key("date"));
    }

    #[test]
    fn test_fetch_request_from_query_struct() {
        #[derive(Serialize)]
        struct Query {
            code: Option<String>,
            from: Option<String>,
            to: String,
            limit: u32,
        }

        let request = FetchRequest::new("/prices/daily_quotes")
            .query(&Query {
                code: Some("4478".into()),
                from: None,
                to: String::new(),
                limit: 5,
            })
            .unwrap();

        let params = request.params();
        assert_eq!(params.len(), 2);
        assert_eq!(params["code"], "4478");
        assert_eq!(params["limit"], "5");
    }

    #[test]
    fn test_fetch_request_rejects_non_object_query() {
        let err = FetchRequest::new("/x").query(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
