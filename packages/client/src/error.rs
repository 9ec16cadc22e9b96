/// Result type for all client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a store operation can produce.
///
/// Validation, transport, decoding and store-reported errors all converge
/// here; callers only ever see this type, never the transport internals.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The key was empty. Rejected before any request is made.
    #[error("invalid key provided")]
    InvalidKey,

    /// The value was empty. Rejected before any request is made.
    #[error("invalid value provided")]
    InvalidValue,

    /// The endpoint configuration could not be used.
    #[error("invalid endpoint: {message}")]
    InvalidEndpoint { message: String },

    /// The HTTP client could not be built or the request never completed
    /// (connection refused, timeout, malformed URL).
    #[error("http request failed: {message}")]
    Transport { message: String },

    /// The server answered with a status outside the pair the store uses
    /// for completed requests (success and bad-request).
    #[error("server responded with status code {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body did not parse as a JSON object.
    #[error("response is not a json object")]
    NotJsonObject,

    /// The response was a JSON object of no recognized shape.
    #[error("invalid error message")]
    InvalidErrorBody,

    /// A structured error reported by the store itself, such as a missing
    /// key or a compare-and-swap mismatch. Code and message are preserved
    /// verbatim.
    #[error("store error {code}: {message}")]
    Store { code: i64, message: String },
}
