use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::{Md5Hasher, Result, VerifiedReader};

/// Number of digest bytes a [`ContentHash`] keeps.
pub const CONTENT_HASH_BYTES: usize = 16;

/// Lowercase hex of the first [`CONTENT_HASH_BYTES`] bytes of a digest.
///
/// Remote records are normalized through [`ContentHash::new`] so comparison
/// ignores case and surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    pub fn new(hex: impl AsRef<str>) -> Self {
        Self(hex.as_ref().trim().to_ascii_lowercase())
    }

    pub fn from_digest(digest: &[u8]) -> Self {
        let len = digest.len().min(CONTENT_HASH_BYTES);
        Self(hex::encode(&digest[..len]))
    }

    /// Hash an in-memory body.
    pub fn of_bytes(data: &[u8]) -> Self {
        Self::from_digest(&Md5Hasher::digest(data))
    }

    /// Hash a file on disk. A missing file surfaces as `io::ErrorKind::NotFound`.
    pub fn of_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        VerifiedReader::new(io::BufReader::new(file), Md5Hasher::new()).drain()
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check a downloaded body against the hash the remote recorded for it.
pub fn verify_bytes(data: &[u8], expected: &ContentHash) -> Result<()> {
    let mut reader = VerifiedReader::new(data, Md5Hasher::new());
    io::copy(&mut reader, &mut io::sink())?;
    reader.finish(expected)
}
