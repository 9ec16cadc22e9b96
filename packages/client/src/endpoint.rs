use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Host used when no endpoint is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Client port the store listens on by default.
pub const DEFAULT_PORT: u16 = 4001;

/// Key namespace of the v1 API.
const KEYS_PREFIX: &str = "keys";

/// Network location of the store.
///
/// Immutable once constructed; a client holds one endpoint for its whole
/// lifetime. Host and port are validated up front so a bad configuration
/// fails at construction, never per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Create an endpoint from a host and port.
    ///
    /// The host must be non-empty and the port non-zero.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        let host = host.into();
        if host.is_empty() {
            return Err(Error::InvalidEndpoint {
                message: "host must be non-empty".to_string(),
            });
        }
        if port == 0 {
            return Err(Error::InvalidEndpoint {
                message: "port must be non-zero".to_string(),
            });
        }
        Ok(Self { host, port })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// URL for `key` under the standard `keys` prefix.
    pub fn key_url(&self, key: &str) -> String {
        self.url_for(KEYS_PREFIX, key)
    }

    /// URL for `key` under an explicit prefix:
    /// `http://{host}:{port}/v1/{prefix}/{key}`.
    ///
    /// The key is concatenated as-is; the builder applies no escaping.
    pub fn url_for(&self, prefix: &str, key: &str) -> String {
        format!("http://{}:{}/v1/{}/{}", self.host, self.port, prefix, key)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    /// Parse a `host:port` pair.
    fn from_str(s: &str) -> Result<Self> {
        let (host, port) = s.split_once(':').ok_or_else(|| Error::InvalidEndpoint {
            message: format!("expected host:port, got '{}'", s),
        })?;
        let port = port.parse::<u16>().map_err(|_| Error::InvalidEndpoint {
            message: format!("invalid port '{}'", port),
        })?;
        Self::new(host, port)
    }
}
