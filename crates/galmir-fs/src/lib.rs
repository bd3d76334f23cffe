//! Filesystem primitives for mirroring a remote tree.
//!
//! Files are always written whole: content lands in a hidden sibling first and
//! is renamed over the destination, so a reader never observes a half-written
//! image.

mod error;
mod sanitize;

pub use error::{Error, Result};
pub use sanitize::sanitize_component;

use std::path::Path;

#[cfg(unix)]
const DEFAULT_PERMISSIONS: u32 = 0o644;

#[cfg(not(unix))]
const DEFAULT_PERMISSIONS: u32 = 0;

#[derive(Clone, Copy, Debug)]
pub struct AtomicWriteOptions {
    permissions: u32,
    prefix:      &'static str,
    suffix:      &'static str,
}

impl Default for AtomicWriteOptions {
    fn default() -> Self { Self::new() }
}

impl AtomicWriteOptions {
    pub fn new() -> Self {
        Self {
            permissions: DEFAULT_PERMISSIONS,
            prefix:      ".tmp.",
            suffix:      ".galmir",
        }
    }

    #[cfg(unix)]
    pub fn permissions(mut self, permissions: u32) -> Self {
        self.permissions = permissions;
        self
    }

    #[cfg(not(unix))]
    pub fn permissions(self, _permissions: u32) -> Self { self }

    pub fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    #[cfg(unix)]
    fn into_permissions(self) -> Option<std::fs::Permissions> {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(self.permissions))
    }

    #[cfg(not(unix))]
    fn into_permissions(self) -> Option<std::fs::Permissions> { None }
}

/// Write `content` to `path`, replacing any existing file in one rename.
pub fn atomic_write(
    path: impl AsRef<Path>,
    content: &[u8],
    options: AtomicWriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .ok_or_else(|| Error::NoParent(path.to_path_buf()))?;
    // Fixed length whatever the target name is.
    let tmp_path = parent.join(format!(
        "{}{}{}",
        options.prefix,
        uuid::Uuid::new_v4().simple(),
        options.suffix
    ));

    let write_err = |source| Error::Write {
        path: tmp_path.clone(),
        source,
    };

    std::fs::write(&tmp_path, content).map_err(write_err)?;

    if let Some(perms) = options.into_permissions() {
        std::fs::set_permissions(&tmp_path, perms).map_err(write_err)?;
    }

    std::fs::rename(&tmp_path, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp_path);
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Create `path` and its parents. An existing directory is success.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
