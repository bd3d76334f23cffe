//! Mirrors a remote tree of folders and albums onto local storage.
//!
//! [`TreeWalker`] walks folders depth-first, creating one directory per
//! folder and album. Each album's images are named by [`SessionSequencer`]
//! and made current by [`Downloader`], which only fetches when the local
//! file's hash differs from the listed one. Progress and failures flow to a
//! [`Reporter`]; the walk never stops for a single bad image or node.

mod console;
mod downloader;
mod error;
mod progress;
mod report;
mod sequencer;
mod walker;

pub use console::ConsoleReporter;
pub use downloader::{Downloader, EnsureOutcome};
pub use error::{DownloadError, Result};
pub use report::{NullReporter, Reporter, SkipReason, WalkEvent, WalkSummary};
pub use sequencer::{Assignment, SessionSequencer, session_key};
pub use walker::{TreeWalker, WalkOptions};
