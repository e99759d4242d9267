//! Hook invocation: read the payload, validate it, touch the target.

use std::io::Read;
use std::path::{Path, PathBuf};

use touchhook_fsops::{TouchOutcome, touch};
use touchhook_telemetry::hook_span;
use tracing::{debug, info};

use crate::error::{HookError, HookResult};
use crate::payload::HookPayload;

/// File created or refreshed inside the container root filesystem.
pub const TARGET_FILE_NAME: &str = "tmp.txt";

/// What a successful invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchReport {
    /// Path that was touched.
    pub target: PathBuf,
    /// Whether the file was created or refreshed.
    pub outcome: TouchOutcome,
}

/// Runs one hook invocation end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookRunner;

impl HookRunner {
    /// Runner targeting [`TARGET_FILE_NAME`].
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Path touched for a given root filesystem.
    #[must_use]
    pub fn target_for(rootfs: &Path) -> PathBuf {
        rootfs.join(TARGET_FILE_NAME)
    }

    /// Read the whole payload from `input` and touch the target it names.
    ///
    /// # Errors
    ///
    /// Returns [`HookError`] when the input cannot be read, is not a valid
    /// payload, or the filesystem rejects the touch.
    pub fn run<R: Read>(&self, mut input: R) -> HookResult<TouchReport> {
        let mut bytes = Vec::new();
        input
            .read_to_end(&mut bytes)
            .map_err(|source| HookError::ReadInput { source })?;
        debug!(bytes = bytes.len(), "read hook payload");

        let payload = HookPayload::from_slice(&bytes)?;
        let span = hook_span(
            payload.id.as_deref(),
            payload.pid,
            payload.status.as_deref(),
        );
        let _entered = span.enter();
        self.apply(&payload)
    }

    /// Touch the target for an already validated payload.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Filesystem`] when the create or timestamp update fails.
    pub fn apply(&self, payload: &HookPayload) -> HookResult<TouchReport> {
        let target = Self::target_for(payload.rootfs());
        let outcome = touch(&target).map_err(|source| HookError::Filesystem { source })?;
        info!(
            target = %target.display(),
            outcome = outcome.as_str(),
            "hook touched target"
        );
        Ok(TouchReport { target, outcome })
    }
}
