//! HTTP GET with bounded, constant-backoff retry.
//!
//! # Architecture
//!
//! - [`data`] - Immutable configuration
//! - [`core`] - Pure decisions (status classification, retry budget)
//! - [`effects`] - I/O behind the [`HttpClient`] trait
//!
//! Server errors (5xx) are retried; client errors and transport failures are
//! returned at once. The fetcher reports retries through a callback and never
//! logs on its own.

mod core;
mod data;
mod effects;
mod error;

pub use self::core::{RetryPolicy, StatusClass, classify_status};
pub use data::{DEFAULT_USER_AGENT, FetchOptions, RetryEvent};
pub use effects::{Fetcher, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
