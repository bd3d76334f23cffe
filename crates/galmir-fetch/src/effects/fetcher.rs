use bytes::Bytes;

use crate::core::{StatusClass, classify_status};
use crate::data::{FetchOptions, RetryEvent};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// GET with the configured headers, retrying server errors per the policy.
#[derive(Clone)]
pub struct Fetcher<C> {
    client:  C,
    options: FetchOptions,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C, options: FetchOptions) -> Self {
        Self { client, options }
    }

    /// Fetch `url` and return the full body.
    ///
    /// - 2xx: the body.
    /// - 5xx: retried with a constant delay; once the budget is spent,
    ///   [`FetchError::UpstreamUnavailable`] with the last status.
    /// - any other status: [`FetchError::UpstreamRejected`] at once.
    /// - no response: [`FetchError::Transport`] at once.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        let mut retries = 0;

        loop {
            let response = self
                .client
                .get(url, &self.options.headers)
                .await
                .map_err(FetchError::transport)?;

            match classify_status(response.status) {
                StatusClass::Success => return Ok(response.body),
                StatusClass::Rejected => {
                    return Err(FetchError::UpstreamRejected {
                        status: response.status,
                    });
                }
                StatusClass::Transient => {
                    let Some(delay) = self.options.retry.next_delay(retries) else {
                        return Err(FetchError::UpstreamUnavailable {
                            status:   response.status,
                            attempts: retries + 1,
                        });
                    };
                    retries += 1;
                    if let Some(ref callback) = self.options.on_retry {
                        callback(&RetryEvent {
                            url: url.to_string(),
                            status: response.status,
                            attempt: retries,
                            delay,
                        });
                    }
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
