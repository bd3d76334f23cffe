//! Depth-first mirror of a remote folder tree.
//!
//! Folders become directories and albums become directories of images. The
//! walk keeps an explicit stack of open folders, each holding its listing
//! cursor and the children of the last page not yet visited. A child is fully
//! mirrored before its next sibling, so the order matches a recursive walk.

use std::collections::{HashSet, VecDeque};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use galmir_fetch::HttpClient;
use galmir_fs::sanitize_component;
use galmir_tree::{Advance, Cursor, ImageRecord, NodeKind, Page, TreeClient, TreeNode};

use crate::downloader::Downloader;
use crate::error::DownloadError;
use crate::report::{Reporter, SkipReason, WalkEvent, WalkSummary};
use crate::sequencer::SessionSequencer;

#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Attempts per page before the node is abandoned. `None` retries forever.
    pub page_attempts:    Option<u32>,
    pub page_retry_delay: Duration,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            page_attempts:    Some(10),
            page_retry_delay: Duration::from_secs(1),
        }
    }
}

struct FolderFrame {
    node_id: String,
    path:    PathBuf,
    cursor:  Cursor,
    pending: VecDeque<TreeNode>,
    /// Sanitized names already given to children of this folder.
    claimed: HashSet<String>,
}

pub struct TreeWalker<C, R> {
    client:     TreeClient<C>,
    downloader: Downloader<C>,
    reporter:   R,
    options:    WalkOptions,
}

impl<C: HttpClient, R: Reporter> TreeWalker<C, R> {
    pub fn new(client: TreeClient<C>, downloader: Downloader<C>, reporter: R) -> Self {
        Self {
            client,
            downloader,
            reporter,
            options: WalkOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Mirror the folder `root_id` into `root`, creating it if needed.
    ///
    /// Failures are reported and counted; the walk itself never fails.
    pub async fn walk(&self, root_id: &str, root: &Path) -> WalkSummary {
        let mut summary = WalkSummary::default();

        if let Err(error) = galmir_fs::ensure_dir(root) {
            self.reporter.report(&WalkEvent::DirectoryFailed { path: root, error: &error });
            summary.nodes_abandoned += 1;
            return summary;
        }

        let mut stack = vec![self.open_folder(root_id, root.to_path_buf(), &mut summary)];

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.pending.pop_front() {
                let next = self
                    .visit_child(&frame.path, &mut frame.claimed, child, &mut summary)
                    .await;
                if let Some(folder) = next {
                    stack.push(folder);
                }
                continue;
            }

            if frame.cursor.is_exhausted() {
                self.reporter.report(&WalkEvent::FolderDone { path: &frame.path });
                stack.pop();
                continue;
            }

            let start = frame.cursor.start();
            let node_id = frame.node_id.as_str();
            let page = self
                .fetch_page(node_id, &frame.path, start, move || {
                    self.client.list_folder_children(node_id, start)
                })
                .await;

            match page {
                Some(page) => {
                    if frame.cursor.advance(page.count, page.total) == Advance::Stalled {
                        self.reporter.report(&WalkEvent::ListingStalled {
                            node_id: &frame.node_id,
                            start,
                            total: page.total,
                        });
                    }
                    frame.pending.extend(page.items);
                }
                None => {
                    summary.nodes_abandoned += 1;
                    stack.pop();
                }
            }
        }

        summary
    }

    fn open_folder(&self, node_id: &str, path: PathBuf, summary: &mut WalkSummary) -> FolderFrame {
        self.reporter.report(&WalkEvent::FolderStarted { path: &path, node_id });
        summary.folders += 1;
        FolderFrame {
            node_id: node_id.to_string(),
            path,
            cursor: Cursor::new(),
            pending: VecDeque::new(),
            claimed: HashSet::new(),
        }
    }

    /// Mirror one child of a folder. A child folder is returned for the caller
    /// to descend into; albums are mirrored here.
    async fn visit_child(
        &self,
        parent: &Path,
        claimed: &mut HashSet<String>,
        child: TreeNode,
        summary: &mut WalkSummary,
    ) -> Option<FolderFrame> {
        let reason = match &child.kind {
            NodeKind::Other(kind) => Some(SkipReason::UnexpectedNodeType(kind)),
            _ if child.remote_id.is_empty() => Some(SkipReason::MissingRemoteId),
            _ => None,
        };
        if let Some(reason) = reason {
            self.reporter.report(&WalkEvent::ChildSkipped {
                parent,
                name: &child.name,
                reason,
            });
            summary.children_skipped += 1;
            return None;
        }

        let component = sanitize_component(&child.name);
        if !claimed.insert(component.to_string()) {
            self.reporter.report(&WalkEvent::ChildSkipped {
                parent,
                name: &child.name,
                reason: SkipReason::NameCollision(&component),
            });
            summary.children_skipped += 1;
            return None;
        }

        let path = parent.join(&*component);
        if let Err(error) = galmir_fs::ensure_dir(&path) {
            self.reporter.report(&WalkEvent::DirectoryFailed { path: &path, error: &error });
            summary.children_skipped += 1;
            return None;
        }

        match child.kind {
            NodeKind::Folder => Some(self.open_folder(&child.remote_id, path, summary)),
            _ => {
                self.mirror_album(&child.remote_id, &path, summary).await;
                None
            }
        }
    }

    async fn mirror_album(&self, album_id: &str, path: &Path, summary: &mut WalkSummary) {
        self.reporter.report(&WalkEvent::AlbumStarted { path, album_id });
        summary.albums += 1;

        let mut sequencer = SessionSequencer::new();
        let mut claimed = HashSet::new();
        let mut cursor = Cursor::new();

        while !cursor.is_exhausted() {
            let start = cursor.start();
            let page = self
                .fetch_page(album_id, path, start, move || {
                    self.client.list_album_images(album_id, start)
                })
                .await;
            let Some(page) = page else {
                summary.nodes_abandoned += 1;
                return;
            };

            if cursor.total().is_none() {
                self.reporter.report(&WalkEvent::AlbumTotal { path, total: page.total });
            }
            let advance = cursor.advance(page.count, page.total);

            for image in page.items {
                self.mirror_image(path, &mut sequencer, &mut claimed, image, summary)
                    .await;
            }

            if advance == Advance::Stalled {
                self.reporter.report(&WalkEvent::ListingStalled {
                    node_id: album_id,
                    start,
                    total: page.total,
                });
            }
        }

        self.reporter.report(&WalkEvent::AlbumDone { path });
    }

    async fn mirror_image(
        &self,
        album: &Path,
        sequencer: &mut SessionSequencer,
        claimed: &mut HashSet<String>,
        image: ImageRecord,
        summary: &mut WalkSummary,
    ) {
        let assignment = sequencer.assign(&image.file_name);
        let local_name = sanitize_component(&assignment.local_name).into_owned();
        let local_path = album.join(&local_name);

        let result = if !claimed.insert(local_name.clone()) {
            Err(DownloadError::NameCollision(local_name))
        } else {
            match &image.content {
                Some(content) => self.downloader.ensure(&local_path, content).await,
                None => Err(DownloadError::UnresolvedContent),
            }
        };

        summary.record(&result);
        self.reporter.report(&WalkEvent::Image {
            path:      &local_path,
            file_name: &image.file_name,
            result:    &result,
        });
    }

    /// Fetch one page, retrying the same start until it succeeds or the
    /// attempt bound is reached. A page is never skipped.
    async fn fetch_page<T, F, Fut>(
        &self,
        node_id: &str,
        path: &Path,
        start: u64,
        fetch: F,
    ) -> Option<Page<T>>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = galmir_tree::Result<Page<T>>>,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let error = match fetch().await {
                Ok(page) => return Some(page),
                Err(error) => error,
            };

            self.reporter.report(&WalkEvent::PageFailed {
                node_id,
                start,
                attempt,
                error: &error,
            });

            if self.options.page_attempts.is_some_and(|max| attempt >= max.max(1)) {
                self.reporter.report(&WalkEvent::NodeAbandoned {
                    path,
                    node_id,
                    start,
                    attempts: attempt,
                });
                return None;
            }

            tokio::time::sleep(self.options.page_retry_delay).await;
        }
    }
}
