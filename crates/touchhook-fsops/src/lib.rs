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

//! Filesystem primitives for the touchhook lifecycle hook.
//!
//! Layout: `error.rs` (structured failures), `touch.rs` (create-or-refresh).

pub mod error;
pub mod touch;

pub use error::{FsOpsError, FsOpsResult};
pub use touch::{TouchOutcome, touch};
