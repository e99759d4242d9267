//! # Design
//!
//! - Constant-message variants with structured context, mirroring the fsops errors.
//! - Each variant belongs to one caller-facing [`HookErrorKind`] that fixes the exit code.
//! - `display_message` is the single diagnostic line printed on stderr.

use std::error::Error as _;
use std::fmt::{self, Display, Formatter};
use std::io;

use thiserror::Error;
use touchhook_fsops::FsOpsError;

/// Result type for hook invocations.
pub type HookResult<T> = Result<T, HookError>;

/// Caller-facing classification of hook failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookErrorKind {
    /// Standard input could not be read.
    ReadInput,
    /// Standard input was not syntactically valid JSON.
    MalformedInput,
    /// The required path field was absent, empty, or not a string.
    MissingField,
    /// The touch was rejected by the operating system.
    FilesystemError,
}

impl HookErrorKind {
    /// Stable label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadInput => "read input",
            Self::MalformedInput => "malformed input",
            Self::MissingField => "missing field",
            Self::FilesystemError => "filesystem error",
        }
    }

    /// Process exit status reported to the runtime.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::MalformedInput | Self::MissingField => 2,
            Self::ReadInput | Self::FilesystemError => 3,
        }
    }
}

impl Display for HookErrorKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Errors produced while running the hook.
#[derive(Debug, Error)]
pub enum HookError {
    /// Reading standard input failed.
    #[error("failed to read hook payload")]
    ReadInput {
        /// Underlying IO error.
        source: io::Error,
    },
    /// The payload bytes were not a JSON document.
    #[error("hook payload is not valid json")]
    MalformedInput {
        /// Underlying JSON syntax error.
        source: serde_json::Error,
    },
    /// A required field did not resolve to a usable value.
    #[error("hook payload field missing or invalid")]
    MissingField {
        /// Dotted path of the field.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
    },
    /// Creating or refreshing the target file failed.
    #[error("touch failed")]
    Filesystem {
        /// Underlying filesystem error.
        source: FsOpsError,
    },
}

impl HookError {
    /// Classification of this error.
    #[must_use]
    pub const fn kind(&self) -> HookErrorKind {
        match self {
            Self::ReadInput { .. } => HookErrorKind::ReadInput,
            Self::MalformedInput { .. } => HookErrorKind::MalformedInput,
            Self::MissingField { .. } => HookErrorKind::MissingField,
            Self::Filesystem { .. } => HookErrorKind::FilesystemError,
        }
    }

    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }

    /// Human-readable one-line diagnostic including the error's context.
    #[must_use]
    pub fn display_message(&self) -> String {
        let detail = match self {
            Self::ReadInput { source } => format!("{self}: {source}"),
            Self::MalformedInput { source } => format!("{self}: {source}"),
            Self::MissingField { field, reason } => format!("{self}: {field} ({reason})"),
            Self::Filesystem { source } => {
                let cause = source
                    .source()
                    .map_or_else(|| source.to_string(), ToString::to_string);
                format!(
                    "{self}: {} {}: {cause}",
                    source.operation(),
                    source.path().display()
                )
            }
        };
        format!("{}: {detail}", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::Error as _;
    use std::error::Error;

    fn syntax_error() -> serde_json::Error {
        match serde_json::from_str::<serde_json::Value>("{not json") {
            Ok(_) => serde_json::Error::custom("expected invalid json"),
            Err(err) => err,
        }
    }

    #[test]
    fn kinds_map_to_exit_codes() {
        let cases = [
            (
                HookError::ReadInput {
                    source: io::Error::other("stdin"),
                },
                HookErrorKind::ReadInput,
                3,
            ),
            (
                HookError::MalformedInput {
                    source: syntax_error(),
                },
                HookErrorKind::MalformedInput,
                2,
            ),
            (
                HookError::MissingField {
                    field: "config.rootfs",
                    reason: "absent",
                },
                HookErrorKind::MissingField,
                2,
            ),
        ];

        for (err, kind, code) in cases {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.exit_code(), code);
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn missing_field_message_names_field_and_reason() {
        let err = HookError::MissingField {
            field: "config.rootfs",
            reason: "empty",
        };
        assert_eq!(
            err.display_message(),
            "missing field: hook payload field missing or invalid: config.rootfs (empty)"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn filesystem_message_includes_operation_and_path() -> anyhow::Result<()> {
        let temp = tempfile::Builder::new().prefix("touchhook-").tempdir()?;
        let target = temp.path().join("absent").join("tmp.txt");
        let Err(source) = touchhook_fsops::touch(&target) else {
            anyhow::bail!("expected touch to fail");
        };

        let err = HookError::Filesystem { source };
        let message = err.display_message();

        assert_eq!(err.kind(), HookErrorKind::FilesystemError);
        assert_eq!(err.exit_code(), 3);
        assert!(message.starts_with("filesystem error: touch failed: touch.create "));
        assert!(message.contains(&target.display().to_string()));
        assert!(err.source().is_some());
        Ok(())
    }

    #[test]
    fn malformed_message_carries_parser_detail() {
        let err = HookError::MalformedInput {
            source: syntax_error(),
        };
        let message = err.display_message();
        assert!(message.starts_with("malformed input: hook payload is not valid json: "));
        assert!(message.contains("line 1"));
    }
}
