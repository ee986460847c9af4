//! Outbound request description.

use crate::FetchError;
use serde::Serialize;
use std::collections::BTreeMap;

/// HTTP methods. The webhook only accepts POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
        }
    }
}

/// A fully described outbound request, handed to an [`HttpTransport`](crate::HttpTransport).
///
/// Headers are kept in a sorted map so recorded requests compare and print
/// deterministically.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBuilder {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Parse the JSON body back into a value. Used by transports and tests
    /// that need to inspect what was sent.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|bytes| serde_json::from_slice(bytes).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Lead<'a> {
            name: &'a str,
        }

        let req = RequestBuilder::new(Method::Post, "https://hooks.example.com/exec")
            .json(&Lead { name: "North Star" })
            .unwrap();

        assert_eq!(
            req.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(req.body_json().unwrap()["name"], "North Star");
    }

    #[test]
    fn test_unserializable_body_is_json_error() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "tuple keys are not JSON");

        let err = RequestBuilder::new(Method::Post, "/").json(&map).unwrap_err();
        assert!(matches!(err, FetchError::JsonError(_)));
    }
}
