#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]

//! OCI lifecycle hook that ensures `tmp.txt` exists inside the container rootfs.
//!
//! Layout:
//! - `payload.rs`: typed hook state and boundary validation
//! - `runner.rs`: read, validate, touch
//! - `error.rs`: error taxonomy and exit codes
//! - `config.rs`: environment-driven logging settings
//! - `main.rs`: thin entrypoint delegating to `run()`

pub mod config;
pub mod error;
pub mod payload;
pub mod runner;

use std::io;

use tracing::debug;

pub use config::HookSettings;
pub use error::{HookError, HookErrorKind, HookResult};
pub use payload::HookPayload;
pub use runner::{HookRunner, TARGET_FILE_NAME, TouchReport};

/// Runs the hook against the process's standard input and returns the exit code.
///
/// Nothing is written on success. On failure a single `error: ...` line goes to stderr.
#[must_use]
pub fn run() -> i32 {
    let settings = HookSettings::from_env();
    if let Err(err) = touchhook_telemetry::init_logging(&settings.logging_config()) {
        eprintln!("warning: {err}");
    }

    match HookRunner::new().run(io::stdin().lock()) {
        Ok(_) => 0,
        Err(err) => {
            debug!(error = ?err, "hook invocation failed");
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}
