use crate::dispatcher::EventDispatcher;
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Non-blank lines in the request body
    pub received: usize,
    /// Handler invocations across all events
    pub dispatched: usize,
    /// Lines that failed to decode
    pub rejected: usize,
}

/// Handler for POST /v1/events (NDJSON, one repository event per line)
///
/// Every line is its own event: a malformed line is logged and counted,
/// the remaining lines are still dispatched.
pub async fn events_handler(
    State(dispatcher): State<Arc<EventDispatcher>>,
    body: String,
) -> Json<DispatchSummary> {
    let mut summary = DispatchSummary::default();

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        summary.received += 1;
        match dispatcher.dispatch(line) {
            Ok(handled) => summary.dispatched += handled,
            Err(e) => {
                warn!("Rejected event: {e}");
                summary.rejected += 1;
            }
        }
    }

    info!(
        "Processed {} event(s): {} handler invocation(s), {} rejected",
        summary.received, summary.dispatched, summary.rejected
    );
    Json(summary)
}
