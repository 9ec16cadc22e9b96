/// HTTP method for store requests.
///
/// Only the verbs the store API actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    GET,
    POST,
    DELETE,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => http::Method::GET,
            Method::POST => http::Method::POST,
            Method::DELETE => http::Method::DELETE,
        }
    }
}

/// One request handed to the transport.
///
/// The URL is fully built and the body, when present, is the raw form
/// payload; the transport adds nothing but the transfer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP verb.
    pub method: Method,

    /// Complete request URL.
    pub url: String,

    /// Form body for write operations, already concatenated.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body.into()),
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            url: url.into(),
            body: None,
        }
    }
}

/// Raw response surfaced by the transport: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,

    /// Body bytes as text, not yet decoded.
    pub body: String,
}

/// Normalized success payload for every operation.
///
/// `value` carries the stored value for get/set/test-and-set and the
/// separator-stripped key path for delete confirmations, so callers never
/// branch on which shape the store answered with. `index` is the store's
/// modification index when the response included one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvResponse {
    /// The value (or echoed key, for delete) the store reported.
    pub value: String,

    /// Modification index, when the store sent one.
    pub index: Option<u64>,
}
