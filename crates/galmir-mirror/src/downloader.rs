use std::io;
use std::path::Path;

use galmir_fetch::{Fetcher, HttpClient};
use galmir_fs::AtomicWriteOptions;
use galmir_tree::RemoteContent;
use galmir_verify::{ContentHash, verify_bytes};

use crate::error::{DownloadError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The local file already hashes to the remote value.
    Skipped,
    Downloaded {
        /// A local file existed but its hash differed.
        replaced: bool,
        /// The downloaded body hashes to the remote value.
        verified: bool,
    },
}

/// Makes a local file match remote content, fetching only when the hashes differ.
pub struct Downloader<C> {
    fetcher: Fetcher<C>,
}

impl<C: HttpClient> Downloader<C> {
    pub fn new(fetcher: Fetcher<C>) -> Self {
        Self { fetcher }
    }

    pub async fn ensure(&self, local_path: &Path, content: &RemoteContent) -> Result<EnsureOutcome> {
        let replaced = match ContentHash::of_file(local_path) {
            Ok(local) if local == content.hash => return Ok(EnsureOutcome::Skipped),
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(source) => {
                return Err(DownloadError::Hash {
                    path: local_path.to_path_buf(),
                    source,
                });
            }
        };

        let body = self.fetcher.fetch(&content.url).await?;
        let verified = verify_bytes(&body, &content.hash).is_ok();
        galmir_fs::atomic_write(local_path, &body, AtomicWriteOptions::new())?;

        Ok(EnsureOutcome::Downloaded { replaced, verified })
    }
}
