use std::time::Duration;

use crate::decode::decode_body;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::executor::{HttpExecutor, ReqwestExecutor};
use crate::types::{HttpRequest, KvResponse, Method};

/// Status the store answers completed requests with.
const HTTP_SUCCESS: u16 = 200;

/// Status the store uses to carry structured application errors.
const HTTP_BAD_REQUEST: u16 = 400;

/// Blocking client for the store's `/v1/keys` API.
///
/// One instance per endpoint. Operations take `&self` and perform exactly
/// one HTTP round trip each, with no retries.
///
/// # Example
///
/// ```ignore
/// use dkv_client::{Endpoint, KvClient};
///
/// let client = KvClient::new(Endpoint::new("127.0.0.1", 4001)?)?;
/// client.set("greeting", "hello", 0)?;
/// assert_eq!(client.get("greeting")?.value, "hello");
/// ```
pub struct KvClient {
    endpoint: Endpoint,
    executor: Box<dyn HttpExecutor>,
}

impl KvClient {
    /// Create a client with the default transport (30 second timeout).
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let executor = ReqwestExecutor::with_default_timeout()?;
        Ok(Self::with_executor(endpoint, Box::new(executor)))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        let executor = ReqwestExecutor::new(timeout)?;
        Ok(Self::with_executor(endpoint, Box::new(executor)))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_executor(endpoint: Endpoint, executor: Box<dyn HttpExecutor>) -> Self {
        Self { endpoint, executor }
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Store `value` under `key`, expiring after `ttl` seconds
    /// (0 = never expires).
    pub fn set(&self, key: &str, value: &str, ttl: u64) -> Result<KvResponse> {
        validate_key(key)?;
        validate_value(value)?;

        self.call(Method::POST, key, Some(write_body(value, None, ttl)))
    }

    /// Fetch the value currently stored under `key`.
    ///
    /// A missing key is reported by the store as [`Error::Store`].
    pub fn get(&self, key: &str) -> Result<KvResponse> {
        validate_key(key)?;

        self.call(Method::GET, key, None)
    }

    /// Remove `key`. On success the returned value echoes the deleted key.
    pub fn delete(&self, key: &str) -> Result<KvResponse> {
        validate_key(key)?;

        self.call(Method::DELETE, key, None)
    }

    /// Atomically replace the value under `key` with `value`, but only if
    /// the currently stored value equals `old_value`.
    ///
    /// A mismatch comes back as [`Error::Store`] with the store's compare
    /// failure code. `old_value == None` degrades to a plain
    /// [`set`](KvClient::set), since no expectation means an unconditional
    /// write; an empty `Some("")` is rejected like any other empty value.
    pub fn test_and_set(
        &self,
        key: &str,
        value: &str,
        old_value: Option<&str>,
        ttl: u64,
    ) -> Result<KvResponse> {
        validate_key(key)?;
        validate_value(value)?;

        let old_value = match old_value {
            Some(old_value) => old_value,
            None => return self.set(key, value, ttl),
        };
        validate_value(old_value)?;

        self.call(Method::POST, key, Some(write_body(value, Some(old_value), ttl)))
    }

    /// One round trip: build the request, execute it, gate on status,
    /// decode the body.
    fn call(&self, method: Method, key: &str, body: Option<String>) -> Result<KvResponse> {
        let url = self.endpoint.key_url(key);
        log::debug!("{:?} {}", method, url);

        let request = HttpRequest { method, url, body };
        let response = self
            .executor
            .execute(&request)
            .map_err(|message| Error::Transport { message })?;

        log::debug!("status {}, {} body bytes", response.status, response.body.len());

        // The status only gates transport-level trouble; both accepted
        // codes carry a decodable JSON body that decides the outcome.
        if response.status != HTTP_SUCCESS && response.status != HTTP_BAD_REQUEST {
            return Err(Error::UnexpectedStatus {
                status: response.status,
            });
        }

        decode_body(&response.body)
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey);
    }
    Ok(())
}

fn validate_value(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidValue);
    }
    Ok(())
}

/// Form body for write operations: `value=`, then `prevValue=` for
/// test-and-set, then `ttl=` when non-zero. Plain concatenation; the
/// segments go out unescaped.
fn write_body(value: &str, old_value: Option<&str>, ttl: u64) -> String {
    let mut body = format!("value={}", value);
    if let Some(old_value) = old_value {
        body.push_str(&format!("&prevValue={}", old_value));
    }
    if ttl > 0 {
        body.push_str(&format!("&ttl={}", ttl));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::mock::MockExecutor;
    use crate::types::Method;

    fn client_with(executor: &MockExecutor) -> KvClient {
        KvClient::with_executor(Endpoint::default(), Box::new(executor.clone()))
    }

    #[test]
    fn set_posts_a_form_body() {
        let executor = MockExecutor::new()
            .with_default_response(MockExecutor::response(200, r#"{"value":"value1","index":3}"#));
        let client = client_with(&executor);

        let response = client.set("key1", "value1", 0).unwrap();
        assert_eq!(response.value, "value1");
        assert_eq!(response.index, Some(3));

        let recorded = executor.recorded_requests();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].method, Method::POST);
        assert_eq!(recorded[0].url, "http://127.0.0.1:4001/v1/keys/key1");
        assert_eq!(recorded[0].body.as_deref(), Some("value=value1"));
    }

    #[test]
    fn set_appends_ttl_when_non_zero() {
        let executor = MockExecutor::new()
            .with_default_response(MockExecutor::response(200, r#"{"value":"value1"}"#));
        let client = client_with(&executor);

        client.set("key1", "value1", 5).unwrap();

        let recorded = executor.recorded_requests();
        assert_eq!(recorded[0].body.as_deref(), Some("value=value1&ttl=5"));
    }

    #[test]
    fn set_rejects_empty_inputs_without_a_request() {
        let executor = MockExecutor::new();
        let client = client_with(&executor);

        assert!(matches!(client.set("", "value1", 0), Err(Error::InvalidKey)));
        assert!(matches!(client.set("key1", "", 0), Err(Error::InvalidValue)));
        assert!(executor.recorded_requests().is_empty());
    }

    #[test]
    fn get_sends_no_body() {
        let executor = MockExecutor::new()
            .with_default_response(MockExecutor::response(200, r#"{"value":"value1","index":5}"#));
        let client = client_with(&executor);

        let response = client.get("key1").unwrap();
        assert_eq!(response.value, "value1");
        assert_eq!(response.index, Some(5));

        let recorded = executor.recorded_requests();
        assert_eq!(recorded[0].method, Method::GET);
        assert!(recorded[0].body.is_none());
    }

    #[test]
    fn get_rejects_empty_key_without_a_request() {
        let executor = MockExecutor::new();
        let client = client_with(&executor);

        assert!(matches!(client.get(""), Err(Error::InvalidKey)));
        assert!(executor.recorded_requests().is_empty());
    }

    #[test]
    fn missing_key_surfaces_the_store_error() {
        let executor = MockExecutor::new().with_default_response(MockExecutor::response(
            400,
            r#"{"errorCode":100,"message":"Key not found"}"#,
        ));
        let client = client_with(&executor);

        match client.get("absent") {
            Err(Error::Store { code, message }) => {
                assert_eq!(code, 100);
                assert_eq!(message, "Key not found");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn delete_round_trip() {
        let executor = MockExecutor::new().with_default_response(MockExecutor::response(
            200,
            r#"{"action":"DELETE","key":"/key1","index":6}"#,
        ));
        let client = client_with(&executor);

        let response = client.delete("key1").unwrap();
        assert_eq!(response.value, "key1");
        assert_eq!(response.index, Some(6));

        let recorded = executor.recorded_requests();
        assert_eq!(recorded[0].method, Method::DELETE);
        assert!(recorded[0].body.is_none());
    }

    #[test]
    fn test_and_set_orders_body_segments() {
        let executor = MockExecutor::new()
            .with_default_response(MockExecutor::response(200, r#"{"value":"value2"}"#));
        let client = client_with(&executor);

        client
            .test_and_set("key1", "value2", Some("value1"), 5)
            .unwrap();

        let recorded = executor.recorded_requests();
        assert_eq!(recorded[0].method, Method::POST);
        assert_eq!(
            recorded[0].body.as_deref(),
            Some("value=value2&prevValue=value1&ttl=5")
        );
    }

    #[test]
    fn test_and_set_without_expectation_degrades_to_set() {
        let executor = MockExecutor::new()
            .with_default_response(MockExecutor::response(200, r#"{"value":"value2"}"#));
        let client = client_with(&executor);

        client.test_and_set("key1", "value2", None, 0).unwrap();

        let recorded = executor.recorded_requests();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].body.as_deref(), Some("value=value2"));
    }

    #[test]
    fn test_and_set_rejects_empty_expectation() {
        let executor = MockExecutor::new();
        let client = client_with(&executor);

        assert!(matches!(
            client.test_and_set("key1", "value2", Some(""), 0),
            Err(Error::InvalidValue)
        ));
        assert!(executor.recorded_requests().is_empty());
    }

    #[test]
    fn compare_mismatch_surfaces_the_store_error() {
        let executor = MockExecutor::new().with_default_response(MockExecutor::response(
            400,
            r#"{"errorCode":101,"message":"Compare failed"}"#,
        ));
        let client = client_with(&executor);

        match client.test_and_set("key1", "value2", Some("stale"), 0) {
            Err(Error::Store { code, .. }) => assert_eq!(code, 101),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn bad_request_bodies_are_still_decoded() {
        // The status is only a gate; a 400 carrying a success shape still
        // decodes as a success.
        let executor = MockExecutor::new()
            .with_default_response(MockExecutor::response(400, r#"{"value":"value1"}"#));
        let client = client_with(&executor);

        assert_eq!(client.get("key1").unwrap().value, "value1");
    }

    #[test]
    fn other_statuses_are_a_transport_failure() {
        let executor = MockExecutor::new()
            .with_default_response(MockExecutor::response(500, r#"{"value":"value1"}"#));
        let client = client_with(&executor);

        assert!(matches!(
            client.get("key1"),
            Err(Error::UnexpectedStatus { status: 500 })
        ));
    }

    #[test]
    fn transport_failures_surface_as_errors() {
        let executor = MockExecutor::new().fail_with("connection refused");
        let client = client_with(&executor);

        match client.get("key1") {
            Err(Error::Transport { message }) => assert_eq!(message, "connection refused"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn write_body_segments() {
        assert_eq!(write_body("v", None, 0), "value=v");
        assert_eq!(write_body("v", None, 7), "value=v&ttl=7");
        assert_eq!(write_body("v", Some("old"), 0), "value=v&prevValue=old");
        assert_eq!(
            write_body("v", Some("old"), 7),
            "value=v&prevValue=old&ttl=7"
        );
    }

    #[test]
    fn bodies_are_not_escaped() {
        assert_eq!(
            write_body("a&b=c d", Some("x&y"), 0),
            "value=a&b=c d&prevValue=x&y"
        );
    }
}
