//! Error types for galmir-fetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// No response was obtained at all (DNS, connect, body read). Not retried.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-retryable status.
    #[error("upstream rejected the request with status {status}")]
    UpstreamRejected { status: u16 },

    /// Every attempt ended in a server error.
    #[error("upstream unavailable after {attempts} attempts, last status {status}")]
    UpstreamUnavailable { status: u16, attempts: u32 },
}

impl FetchError {
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        FetchError::Transport(Box::new(err))
    }

    /// The last HTTP status the server sent, if there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UpstreamRejected { status }
            | FetchError::UpstreamUnavailable { status, .. } => Some(*status),
            FetchError::Transport(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
