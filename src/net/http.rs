//! Minimal request/response seam over the browser fetch API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): requests fail with a network error since these
//! endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use crate::config::ClientConfig;
use crate::error::FetchError;

/// HTTP verbs used by the portal API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully-read response: status code plus the raw body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// True for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into a [`FetchError::Status`].
    ///
    /// # Errors
    ///
    /// Returns the status error when the response is not 2xx.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(FetchError::status(self.status, &self.body))
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Decode`] when the body does not match `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_str(&self.body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Generic request primitive. Implemented by the browser client and by test doubles.
#[async_trait::async_trait(?Send)]
pub trait HttpClient: Send + Sync {
    /// Issue one request and read the whole response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if no response was received. Non-2xx
    /// statuses are returned as responses, not errors.
    async fn request(&self, method: Method, path: &str) -> Result<HttpResponse, FetchError>;
}

/// `fetch`-backed client.
///
/// Requests use `credentials: include`, so the session cookie also reaches an
/// API served from another origin (`PORTAL_API_BASE`). That server must answer
/// with `Access-Control-Allow-Credentials: true` and an explicit origin.
#[derive(Clone, Debug, Default)]
pub struct BrowserHttpClient {
    config: ClientConfig,
}

impl BrowserHttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn request(&self, method: Method, path: &str) -> Result<HttpResponse, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url(path);
            let builder = match method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
            }
            .credentials(web_sys::RequestCredentials::Include);
            let resp = builder
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, method, path);
            Err(FetchError::Network("not available on server".to_owned()))
        }
    }
}
