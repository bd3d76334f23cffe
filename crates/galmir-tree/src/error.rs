use galmir_fetch::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url:    String,
        source: url::ParseError,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed page body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
