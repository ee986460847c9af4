//! Transports that actually move requests over the wire.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{FetchError, Method, RequestBuilder, Response};

/// Executes a request and returns the raw response.
///
/// [`FetchClient`](crate::FetchClient) is generic over this so form
/// submissions can be exercised without a network.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Network transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let method = match request.method {
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status, bytes = body.len(), url = %request.url, "response received");
        Ok(Response::new(status, headers, body))
    }
}

/// Transport that answers every request with a fixed outcome and records
/// what was sent. Intended for tests and offline dry runs.
pub struct StaticTransport {
    outcome: Box<dyn Fn() -> Result<Response, FetchError> + Send + Sync>,
    sent: Mutex<Vec<RequestBuilder>>,
}

impl StaticTransport {
    /// Always answer with `response`.
    pub fn respond(response: Response) -> Self {
        Self::with(move || Ok(response.clone()))
    }

    /// Always fail with the error built by `make_err`.
    pub fn fail(make_err: impl Fn() -> FetchError + Send + Sync + 'static) -> Self {
        Self::with(move || Err(make_err()))
    }

    fn with(outcome: impl Fn() -> Result<Response, FetchError> + Send + Sync + 'static) -> Self {
        Self {
            outcome: Box::new(outcome),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn sent(&self) -> Vec<RequestBuilder> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl HttpTransport for StaticTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(request);
        }
        (self.outcome)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_transport_records() {
        let transport = StaticTransport::respond(Response::json_body(200, r#"{"ok":true}"#));
        let req = RequestBuilder::new(Method::Post, "https://hooks.example.com/exec")
            .json(&serde_json::json!({ "ok": true }))
            .unwrap();

        let resp = transport.execute(req.clone()).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(transport.sent(), vec![req]);
    }

    #[tokio::test]
    async fn test_static_transport_failure() {
        let transport = StaticTransport::fail(|| FetchError::Timeout);
        let err = transport
            .execute(RequestBuilder::new(Method::Post, "/"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout));
        assert_eq!(transport.sent().len(), 1);
    }
}
