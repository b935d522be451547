//! HTTP plumbing shared by the auth service and the portal API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `BrowserTransport` reports the call as
//! unavailable; tests substitute their own `HttpTransport`.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to build, send or read a request are `TransportError`s.
//! Non-2xx statuses come back as ordinary `ApiResponse`s so callers decide
//! how to word them.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

/// Header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A backend call relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Full `Authorization` header value, e.g. `Bearer abc`.
    pub authorization: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None, authorization: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `body` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach an `Authorization` header value when one is available.
    #[must_use]
    pub fn authorized(mut self, authorization: Option<String>) -> Self {
        self.authorization = authorization;
        self
    }
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Human-readable reason for a failed call: the backend's `message`
    /// field when it sent one, otherwise a generic status line.
    pub fn error_message(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|body| body.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| status_failed_message(self.status))
    }
}

pub(crate) fn status_failed_message(status: u16) -> String {
    format!("request failed with status code {status}")
}

/// A call that never produced a response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}

/// Sends `ApiRequest`s to the backend.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Perform one call. No retries.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when no HTTP response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Debug, Default)]
pub struct BrowserTransport {
    config: ApiConfig,
}

impl BrowserTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.config.url(&request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            let builder = match request.authorization.as_deref() {
                Some(value) => builder.header(AUTHORIZATION, value),
                None => builder,
            };
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;
            let resp = prepared.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
