//! Span helpers carrying hook invocation context.

use tracing::Span;

/// Build the span that wraps a single hook invocation.
///
/// Fields the runtime did not supply are recorded as `-`.
#[must_use]
pub fn hook_span(container_id: Option<&str>, pid: Option<i64>, status: Option<&str>) -> Span {
    let pid = pid.map_or_else(|| "-".to_string(), |pid| pid.to_string());
    tracing::info_span!(
        "hook",
        container_id = container_id.unwrap_or("-"),
        pid = %pid,
        status = status.unwrap_or("-"),
    )
}
