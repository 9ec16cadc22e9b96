//! # dkv-client
//!
//! Blocking HTTP client for a dkv distributed key-value store.
//!
//! This crate speaks the store's `/v1/keys` API: values are written with
//! form-encoded POST bodies, every response is a small JSON document, and
//! each operation is a single round trip.
//!
//! ## Operations
//!
//! ### Set / Get / Delete
//!
//! ```ignore
//! use dkv_client::{Endpoint, KvClient};
//!
//! let client = KvClient::new(Endpoint::new("127.0.0.1", 4001)?)?;
//!
//! // Store a value, expiring after 30 seconds (0 = never expires)
//! client.set("greeting", "hello", 30)?;
//!
//! // Read it back; `index` carries the store's modification index
//! let response = client.get("greeting")?;
//! assert_eq!(response.value, "hello");
//!
//! // Remove it; the response echoes the deleted key
//! let response = client.delete("greeting")?;
//! assert_eq!(response.value, "greeting");
//! ```
//!
//! ### Test-and-set
//!
//! Atomic compare-and-swap on a single key:
//!
//! ```ignore
//! use dkv_client::{Endpoint, Error, KvClient};
//!
//! let client = KvClient::new(Endpoint::default())?;
//!
//! // Succeeds only if "greeting" currently holds "hello"
//! client.test_and_set("greeting", "goodbye", Some("hello"), 0)?;
//!
//! // A mismatch surfaces the store's compare failure
//! match client.test_and_set("greeting", "again", Some("hello"), 0) {
//!     Err(Error::Store { code, message }) => println!("{}: {}", code, message),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! ## Custom transports
//!
//! [`KvClient::with_executor`] accepts any [`HttpExecutor`], which is how
//! the tests drive the client without a live store.

pub mod client;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod types;

// Re-export main types
pub use client::KvClient;
pub use decode::decode_body;
pub use endpoint::{Endpoint, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{Error, Result};
pub use executor::{HttpExecutor, ReqwestExecutor};
pub use types::{HttpRequest, HttpResponse, KvResponse, Method};
