use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("'{0}' has no parent directory")]
    NoParent(PathBuf),
}

impl Error {
    /// The underlying I/O error kind, for callers that branch on it.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::Write { source, .. } | Error::CreateDir { source, .. } => source.kind(),
            Error::NoParent(_) => io::ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
