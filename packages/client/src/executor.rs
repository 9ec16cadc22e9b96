//! HTTP execution abstraction.
//!
//! The client needs a thin slice of HTTP: set a URL and method, optionally
//! attach a body, perform one blocking call, read back status and body.
//! That slice is a trait so tests can substitute a transport without any
//! network access.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::error::Error;
use crate::types::{HttpRequest, HttpResponse};

/// Write bodies travel as classic form payloads.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Default request timeout of the production transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for performing one blocking HTTP request.
///
/// Errors are plain strings at this seam; the client wraps them into
/// [`Error::Transport`](crate::Error::Transport).
pub trait HttpExecutor: Send + Sync {
    /// Execute the request and return the raw response.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, String>;
}

/// Production executor backed by a blocking reqwest [`Client`].
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// Create an executor with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Create an executor with [`DEFAULT_TIMEOUT`].
    pub fn with_default_timeout() -> Result<Self, Error> {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl HttpExecutor for ReqwestExecutor {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, String> {
        let method: http::Method = request.method.into();
        let url = Url::parse(&request.url).map_err(|e| e.to_string())?;

        let mut req_builder = self.client.request(method, url);
        if let Some(body) = &request.body {
            req_builder = req_builder
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body.clone());
        }

        let response = req_builder.send().map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| e.to_string())?;

        Ok(HttpResponse { status, body })
    }
}
