use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::core::RetryPolicy;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0";

/// A transient failure that is about to be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryEvent {
    pub url:     String,
    pub status:  u16,
    /// 1-based number of the retry about to happen.
    pub attempt: u32,
    pub delay:   Duration,
}

/// Configuration for [`Fetcher`](crate::Fetcher).
///
/// # Examples
///
/// ```
/// use galmir_fetch::{FetchOptions, RetryPolicy};
/// use std::time::Duration;
///
/// let options = FetchOptions::default()
///     .session_cookie("SMSESS", "secret")
///     .retry(RetryPolicy::default().delay(Duration::from_millis(250)));
/// ```
#[derive(Clone)]
pub struct FetchOptions {
    /// Headers sent with every request, retries included.
    ///
    /// Default: a browser `User-Agent`.
    pub headers: Arc<[(String, String)]>,

    /// Retry policy for 5xx responses.
    pub retry: RetryPolicy,

    /// Invoked before each retry sleep. The fetcher itself never logs.
    pub on_retry: Option<Arc<dyn Fn(&RetryEvent) + Send + Sync>>,
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<_> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("FetchOptions")
            .field("headers", &header_names)
            .field("retry", &self.retry)
            .field("on_retry", &self.on_retry.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            headers:  Arc::from(vec![("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string())]),
            retry:    RetryPolicy::default(),
            on_retry: None,
        }
    }
}

impl FetchOptions {
    /// Add a header, replacing any existing header with the same name.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let mut headers: Vec<_> = self
            .headers
            .iter()
            .filter(|(k, _)| !k.eq_ignore_ascii_case(&key))
            .cloned()
            .collect();
        headers.push((key, value.into()));
        self.headers = Arc::from(headers);
        self
    }

    #[must_use]
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        self.header("User-Agent", user_agent)
    }

    /// Carry the session credential as a cookie.
    #[must_use]
    pub fn session_cookie(self, name: &str, value: &str) -> Self {
        self.header("Cookie", format!("{name}={value}"))
    }

    #[must_use]
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn on_retry(mut self, on_retry: Arc<dyn Fn(&RetryEvent) + Send + Sync>) -> Self {
        self.on_retry = Some(on_retry);
        self
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
