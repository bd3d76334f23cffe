//! Reconstructs shoot boundaries inside an album from filename recurrence.
//!
//! The upstream reuses names like `IMG1.jpg` for every shoot of the same
//! subject. Images are grouped by the name's non-numeric prefix; within a
//! group, seeing an index again means a new shoot (occurrence) has begun.
//! The occurrence number becomes the local filename prefix.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static INDEXED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^0-9]*)([0-9]+)\.jpg$").expect("static pattern is valid"));

const EXTENSION: &str = ".jpg";

/// Split a remote filename into its session key and numeric index.
///
/// Names without a trailing number (or with one too large to represent) are
/// their own session with index 0.
pub fn session_key(file_name: &str) -> (&str, u64) {
    INDEXED_NAME
        .captures(file_name)
        .and_then(|caps| {
            let prefix = caps.get(1)?.as_str();
            let index = caps.get(2)?.as_str().parse().ok()?;
            Some((prefix, index))
        })
        .unwrap_or_else(|| (file_name.strip_suffix(EXTENSION).unwrap_or(file_name), 0))
}

#[derive(Debug, Default)]
struct SessionState {
    occurrence: u32,
    seen:       HashSet<u64>,
}

/// Local identity assigned to one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub occurrence: u32,
    /// Occurrence zero-padded to two digits.
    pub prefix:     String,
    /// `{prefix}_{remote file name}`.
    pub local_name: String,
}

/// Per-album sequencing state. Create one per album and drop it afterwards.
#[derive(Debug, Default)]
pub struct SessionSequencer {
    sessions: HashMap<String, SessionState>,
}

impl SessionSequencer {
    pub fn new() -> Self { Self::default() }

    /// Assign the next image of the album, in listing order.
    pub fn assign(&mut self, file_name: &str) -> Assignment {
        let (key, index) = session_key(file_name);
        let state = self.sessions.entry(key.to_string()).or_default();

        if !state.seen.insert(index) {
            state.occurrence += 1;
            state.seen.clear();
            state.seen.insert(index);
        }

        let prefix = format!("{:02}", state.occurrence);
        let local_name = format!("{prefix}_{file_name}");
        Assignment {
            occurrence: state.occurrence,
            prefix,
            local_name,
        }
    }

    /// Number of distinct sessions seen so far.
    pub fn session_count(&self) -> usize { self.sessions.len() }
}
