//! Walk events and the summary of a finished walk.

use std::path::Path;

use galmir_tree::TreeError;

use crate::downloader::EnsureOutcome;
use crate::error::DownloadError;

#[derive(Debug, Clone, Copy)]
pub enum SkipReason<'a> {
    UnexpectedNodeType(&'a str),
    MissingRemoteId,
    /// Another child of the same folder already maps to this local name.
    NameCollision(&'a str),
}

#[derive(Debug)]
pub enum WalkEvent<'a> {
    FolderStarted {
        path:    &'a Path,
        node_id: &'a str,
    },
    FolderDone {
        path: &'a Path,
    },
    AlbumStarted {
        path:     &'a Path,
        album_id: &'a str,
    },
    /// First page of an album arrived; `total` images are expected.
    AlbumTotal {
        path:  &'a Path,
        total: u64,
    },
    AlbumDone {
        path: &'a Path,
    },
    PageFailed {
        node_id: &'a str,
        start:   u64,
        attempt: u32,
        error:   &'a TreeError,
    },
    /// The page attempt bound was reached; the rest of the node is not mirrored.
    NodeAbandoned {
        path:     &'a Path,
        node_id:  &'a str,
        start:    u64,
        attempts: u32,
    },
    /// A page returned no items although more were announced.
    ListingStalled {
        node_id: &'a str,
        start:   u64,
        total:   u64,
    },
    ChildSkipped {
        parent: &'a Path,
        name:   &'a str,
        reason: SkipReason<'a>,
    },
    DirectoryFailed {
        path:  &'a Path,
        error: &'a galmir_fs::Error,
    },
    Image {
        path:      &'a Path,
        file_name: &'a str,
        result:    &'a Result<EnsureOutcome, DownloadError>,
    },
}

/// Receives walk events as they happen.
pub trait Reporter {
    fn report(&self, event: &WalkEvent<'_>);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &WalkEvent<'_>) { (**self).report(event) }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: &WalkEvent<'_>) {}
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkSummary {
    pub folders:          u64,
    pub albums:           u64,
    pub downloaded:       u64,
    /// Downloads that replaced a local file with a different hash.
    pub replaced:         u64,
    /// Downloads whose body did not hash to the remote value.
    pub unverified:       u64,
    pub skipped:          u64,
    pub failed:           u64,
    pub children_skipped: u64,
    pub nodes_abandoned:  u64,
}

impl WalkSummary {
    pub(crate) fn record(&mut self, result: &Result<EnsureOutcome, DownloadError>) {
        match result {
            Ok(EnsureOutcome::Skipped) => self.skipped += 1,
            Ok(EnsureOutcome::Downloaded { replaced, verified }) => {
                self.downloaded += 1;
                self.replaced += u64::from(*replaced);
                self.unverified += u64::from(!*verified);
            }
            Err(_) => self.failed += 1,
        }
    }

    /// Every listed image is mirrored and no node was given up on.
    pub fn is_complete(&self) -> bool { self.failed == 0 && self.nodes_abandoned == 0 }
}
