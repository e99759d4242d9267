//! # Design
//!
//! - Provide structured, constant-message errors for the touch primitive.
//! - Capture operation context (operation, path) to make failures reproducible in tests.
//! - Preserve source errors without interpolating context into error messages.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for filesystem operations.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced while touching a file.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// IO failures while interacting with the filesystem.
    #[error("fsops io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Nix syscall failures.
    #[cfg(unix)]
    #[error("fsops nix failure")]
    Nix {
        /// Operation that triggered the nix failure.
        operation: &'static str,
        /// Path involved in the nix failure.
        path: PathBuf,
        /// Underlying nix error.
        source: nix::Error,
    },
}

impl FsOpsError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    #[cfg(unix)]
    pub(crate) fn nix(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: nix::Error,
    ) -> Self {
        Self::Nix {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Operation label recorded when the failure occurred.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Io { operation, .. } => *operation,
            #[cfg(unix)]
            Self::Nix { operation, .. } => *operation,
        }
    }

    /// Path the failing operation was applied to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
            #[cfg(unix)]
            Self::Nix { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn fsops_error_helpers_build_variants() {
        let io_err = FsOpsError::io("touch.create", "rootfs/tmp.txt", io::Error::other("io"));
        assert!(matches!(io_err, FsOpsError::Io { .. }));
        assert!(io_err.source().is_some());
        assert_eq!(io_err.to_string(), "fsops io failure");
        assert_eq!(io_err.operation(), "touch.create");
        assert_eq!(io_err.path(), Path::new("rootfs/tmp.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn nix_variant_preserves_errno() {
        let nix_err = FsOpsError::nix("touch.utimensat", "/ro/tmp.txt", nix::Error::EROFS);
        assert!(matches!(
            nix_err,
            FsOpsError::Nix {
                source: nix::Error::EROFS,
                ..
            }
        ));
        assert!(nix_err.source().is_some());
        assert_eq!(nix_err.to_string(), "fsops nix failure");
        assert_eq!(nix_err.operation(), "touch.utimensat");
        assert_eq!(nix_err.path(), Path::new("/ro/tmp.txt"));
    }
}
