use std::io;
use std::path::PathBuf;

use galmir_fetch::FetchError;
use thiserror::Error;

/// Why a single image could not be mirrored. Never aborts the walk.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("neither an archived original nor a largest rendition was listed")]
    UnresolvedContent,

    #[error("local name {0} is already used in this album")]
    NameCollision(String),

    #[error("failed to hash existing file {}: {source}", path.display())]
    Hash { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Write(#[from] galmir_fs::Error),

    #[error("download failed: {0}")]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, DownloadError>;
