//! Request-scoped trace id, readable from anywhere inside a request.
//!
//! `RequestTrace` opens the scope; error rendering reads it. Outside a
//! request the id is `"unknown"`.

use std::future::Future;

use tokio::task_local;

pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` visible to `trace_id()`.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
