//! Create-or-refresh primitive behind the hook's single filesystem mutation.
//!
//! # Design
//! - Exactly two branches: refresh timestamps when an entry exists, otherwise create it.
//! - Existence follows symlinks, matching `touch(1)`.
//! - Creation is exclusive; losing that race to another creator degrades to a refresh.
//! - Handles opened while creating are released before returning on every path.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{FsOpsError, FsOpsResult};

#[cfg(unix)]
use nix::sys::stat::{UtimensatFlags, utimensat};
#[cfg(unix)]
use nix::sys::time::TimeSpec;

/// Result of a successful touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// No entry existed; an empty file was created.
    Created,
    /// An entry existed; its access and modification times were set to now.
    Refreshed,
}

impl TouchOutcome {
    /// Stable label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Refreshed => "refreshed",
        }
    }
}

/// Create `path` as an empty file, or refresh its timestamps if it already exists.
///
/// Existing content is never modified.
///
/// # Errors
///
/// Returns [`FsOpsError`] when the metadata probe, the create, or the timestamp
/// update is rejected by the operating system (missing parent, permissions,
/// read-only mount, a non-directory path component).
pub fn touch(path: &Path) -> FsOpsResult<TouchOutcome> {
    match fs::metadata(path) {
        Ok(_) => {
            refresh_timestamps(path)?;
            Ok(TouchOutcome::Refreshed)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => create_empty(path),
        Err(err) => Err(FsOpsError::io("touch.metadata", path, err)),
    }
}

fn create_empty(path: &Path) -> FsOpsResult<TouchOutcome> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => {
            drop(file);
            debug!(path = %path.display(), "created empty file");
            Ok(TouchOutcome::Created)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "file appeared before create; refreshing instead");
            refresh_timestamps(path)?;
            Ok(TouchOutcome::Refreshed)
        }
        Err(err) => Err(FsOpsError::io("touch.create", path, err)),
    }
}

#[cfg(unix)]
fn refresh_timestamps(path: &Path) -> FsOpsResult<()> {
    utimensat(
        None,
        path,
        &TimeSpec::UTIME_NOW,
        &TimeSpec::UTIME_NOW,
        UtimensatFlags::FollowSymlink,
    )
    .map_err(|source| FsOpsError::nix("touch.utimensat", path, source))
}

#[cfg(not(unix))]
fn refresh_timestamps(path: &Path) -> FsOpsResult<()> {
    use std::fs::FileTimes;
    use std::time::SystemTime;

    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| FsOpsError::io("touch.open", path, source))?;
    let now = SystemTime::now();
    file.set_times(FileTimes::new().set_accessed(now).set_modified(now))
        .map_err(|source| FsOpsError::io("touch.set_times", path, source))
}
