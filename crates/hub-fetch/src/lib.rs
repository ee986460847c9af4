//! Outbound HTTP for Affiliate Hub.
//!
//! The directory itself never touches the network. The one exception is the
//! onboarding form, which posts JSON to an external webhook. This crate keeps
//! that behind a small builder API and a swappable [`HttpTransport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hub_fetch::{FetchClient, ReqwestTransport};
//!
//! let client = FetchClient::with_transport(Arc::new(ReqwestTransport::default()));
//! let response = client
//!     .post("https://script.google.com/macros/s/.../exec")
//!     .json(&lead)?
//!     .send()
//!     .await?;
//! ```

mod error;
mod request;
mod response;
mod transport;

use std::sync::Arc;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::{HttpTransport, ReqwestTransport, StaticTransport};

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn HttpTransport>,
}

impl FetchClient {
    /// Create a client over an explicit transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        ClientRequestBuilder {
            transport: Arc::clone(&self.transport),
            builder: RequestBuilder::new(Method::Post, url),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    transport: Arc<dyn HttpTransport>,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the response, whatever its status.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(
            method = self.builder.method.as_str(),
            url = %self.builder.url,
            "sending request"
        );
        self.transport.execute(self.builder).await
    }
}
