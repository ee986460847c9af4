//! HTTP response handling.

use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Shorthand for a response with a JSON content type.
    pub fn json_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self::new(status, headers, body.into())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, treating an unparseable body as absent.
    ///
    /// Webhook endpoints frequently answer errors with HTML; callers decide
    /// what a missing payload means.
    pub fn json_opt<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_slice(&self.body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Ack {
        ok: bool,
    }

    #[test]
    fn test_success_range() {
        assert!(Response::json_body(200, "").is_success());
        assert!(Response::json_body(204, "").is_success());
        assert!(!Response::json_body(302, "").is_success());
        assert!(!Response::json_body(500, "").is_success());
    }

    #[test]
    fn test_json_ack() {
        let resp = Response::json_body(200, r#"{"ok": true}"#);
        assert_eq!(resp.json_opt::<Ack>(), Some(Ack { ok: true }));
    }

    #[test]
    fn test_json_opt_html_body() {
        let resp = Response::json_body(500, "<html>Script error</html>");
        assert_eq!(resp.json_opt::<Ack>(), None);
    }
}
