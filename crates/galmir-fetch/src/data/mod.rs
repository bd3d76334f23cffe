//! Immutable configuration for fetching.

pub mod options;

pub use options::{DEFAULT_USER_AGENT, FetchOptions, RetryEvent};
