use std::sync::Mutex;

use tracing::{debug, error, info, warn};

use crate::downloader::EnsureOutcome;
use crate::progress::{AlbumProgress, AlbumProgressConfig, Tracker};
use crate::report::{Reporter, SkipReason, WalkEvent};

/// Logs walk events through `tracing` and shows one progress bar per album.
pub struct ConsoleReporter {
    show_progress: bool,
    album:         Mutex<Option<AlbumProgress>>,
}

impl ConsoleReporter {
    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
            album: Mutex::new(None),
        }
    }

    /// Run `log` without tearing the active bar.
    fn log(&self, log: impl FnOnce()) {
        let album = self.album.lock().unwrap_or_else(|e| e.into_inner());
        match album.as_ref() {
            Some(tracker) => tracker.pb.suspend(log),
            None => log(),
        }
    }

    fn start_album(&self, name: String, total: u64) {
        let tracker = AlbumProgress::new(AlbumProgressConfig {
            len:    total,
            msg:    name,
            hidden: !self.show_progress,
        });
        let mut album = self.album.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = album.replace(tracker) {
            previous.finish(None);
        }
    }

    fn step_album(&self) {
        let album = self.album.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(tracker) = album.as_ref() {
            tracker.step(1);
        }
    }

    fn finish_album(&self) {
        let mut album = self.album.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(tracker) = album.take() {
            tracker.finish(None);
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self { Self::new(true) }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: &WalkEvent<'_>) {
        match event {
            WalkEvent::FolderStarted { path, node_id } => {
                info!(path = %path.display(), node_id, "Requesting folder");
            }
            WalkEvent::FolderDone { path } => {
                debug!(path = %path.display(), "Folder done");
            }
            WalkEvent::AlbumStarted { path, album_id } => {
                info!(path = %path.display(), album_id, "Requesting album");
            }
            WalkEvent::AlbumTotal { path, total } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.start_album(name, *total);
            }
            WalkEvent::AlbumDone { path } => {
                self.finish_album();
                debug!(path = %path.display(), "Album done");
            }
            WalkEvent::PageFailed {
                node_id,
                start,
                attempt,
                error,
            } => self.log(|| warn!(node_id, start, attempt, %error, "Page request failed, retrying")),
            WalkEvent::NodeAbandoned {
                path,
                node_id,
                start,
                attempts,
            } => self.log(|| {
                error!(
                    path = %path.display(),
                    node_id,
                    start,
                    attempts,
                    "Giving up on node; remaining pages not mirrored"
                )
            }),
            WalkEvent::ListingStalled { node_id, start, total } => self.log(|| {
                warn!(node_id, start, total, "Listing returned no items before its announced total")
            }),
            WalkEvent::ChildSkipped { parent, name, reason } => self.log(|| match reason {
                SkipReason::UnexpectedNodeType(kind) => {
                    error!(parent = %parent.display(), name, kind, "Unexpected node type, skipping")
                }
                SkipReason::MissingRemoteId => {
                    error!(parent = %parent.display(), name, "Node has no remote id, skipping")
                }
                SkipReason::NameCollision(local) => {
                    error!(parent = %parent.display(), name, local, "Local name already taken, skipping")
                }
            }),
            WalkEvent::DirectoryFailed { path, error } => {
                self.log(|| error!(path = %path.display(), %error, "Failed to create directory"))
            }
            WalkEvent::Image {
                path,
                file_name,
                result,
            } => {
                match result {
                    Ok(EnsureOutcome::Skipped) => {
                        debug!(path = %path.display(), "Already up to date");
                    }
                    Ok(EnsureOutcome::Downloaded { replaced, verified }) => {
                        if *replaced {
                            self.log(|| {
                                info!(path = %path.display(), "Hash mismatch for existing file, downloaded again")
                            });
                        } else {
                            debug!(path = %path.display(), "Downloaded");
                        }
                        if !verified {
                            self.log(|| {
                                warn!(path = %path.display(), "Downloaded body does not match the listed hash")
                            });
                        }
                    }
                    Err(error) => self.log(|| {
                        error!(path = %path.display(), file_name, %error, "Failed to mirror image")
                    }),
                }
                self.step_album();
            }
        }
    }
}
