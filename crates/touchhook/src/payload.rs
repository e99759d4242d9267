//! Typed hook state read from standard input.
//!
//! # Design
//! - Parse once into JSON, then validate into [`HookPayload`] at the boundary.
//! - `config.rootfs` is the only required field. Other runtime state is read
//!   leniently for log context; a value of the wrong type is dropped.
//! - Unknown fields are ignored.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{HookError, HookResult};

/// Dotted path of the required root filesystem field.
pub const ROOTFS_FIELD: &str = "config.rootfs";

/// Validated hook state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookPayload {
    /// Root filesystem directory of the container.
    pub rootfs: PathBuf,
    /// OCI runtime specification version reported by the runtime.
    pub oci_version: Option<String>,
    /// Container identifier.
    pub id: Option<String>,
    /// Container init process id.
    pub pid: Option<i64>,
    /// Runtime status at the time the hook fired (e.g. `creating`).
    pub status: Option<String>,
    /// Bundle directory of the container.
    pub bundle: Option<PathBuf>,
}

impl HookPayload {
    /// Parse and validate a payload from raw stdin bytes.
    ///
    /// # Errors
    ///
    /// - [`HookError::MalformedInput`] when the bytes are not a JSON document.
    /// - [`HookError::MissingField`] when `config.rootfs` is absent, empty, or not a string,
    ///   or the document is not an object.
    pub fn from_slice(bytes: &[u8]) -> HookResult<Self> {
        let document: Value =
            serde_json::from_slice(bytes).map_err(|source| HookError::MalformedInput { source })?;
        let Value::Object(state) = document else {
            return Err(missing("payload_not_object"));
        };
        let rootfs = rootfs_from(state.get("config"))?;

        Ok(Self {
            rootfs,
            oci_version: first_str(&state, &["ociVersion", "version"]).map(str::to_string),
            id: first_str(&state, &["id"]).map(str::to_string),
            pid: state.get("pid").and_then(Value::as_i64),
            status: first_str(&state, &["status"]).map(str::to_string),
            bundle: first_str(&state, &["bundle", "root"]).map(PathBuf::from),
        })
    }

    /// Root filesystem directory the hook operates in.
    #[must_use]
    pub fn rootfs(&self) -> &Path {
        &self.rootfs
    }
}

const fn missing(reason: &'static str) -> HookError {
    HookError::MissingField {
        field: ROOTFS_FIELD,
        reason,
    }
}

/// First key that holds a string; keys holding other types are skipped.
fn first_str<'a>(state: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| state.get(*key).and_then(Value::as_str))
}

fn rootfs_from(config: Option<&Value>) -> HookResult<PathBuf> {
    let config = match config {
        None | Some(Value::Null) => return Err(missing("config_absent")),
        Some(Value::Object(config)) => config,
        Some(_) => return Err(missing("config_not_object")),
    };
    match config.get("rootfs") {
        None | Some(Value::Null) => Err(missing("absent")),
        Some(Value::String(rootfs)) if rootfs.is_empty() => Err(missing("empty")),
        Some(Value::String(rootfs)) => Ok(PathBuf::from(rootfs)),
        Some(_) => Err(missing("not_a_string")),
    }
}
