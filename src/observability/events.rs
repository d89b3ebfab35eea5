/// Structured event logging for grading sessions.
///
/// Events carry correlation IDs so a host can stitch together the
/// lifecycle of one session across multiple runs.
use crate::config::types::{SessionStatus, Verdict};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlation identifiers for event tracking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunIds {
    /// Stable for the whole session (one exercise attempt).
    pub session_id: String,
    /// Fresh for every accepted `run()`.
    pub run_id: String,
}

impl RunIds {
    /// Create new correlation IDs for a session.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            run_id: Uuid::new_v4().to_string(),
        }
    }

    /// Same session, fresh run ID.
    pub fn next_run(&self) -> Self {
        Self {
            session_id: self.session_id.clone(),
            run_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RunIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle events emitted by the session controller.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionCreated {
        language: &'static str,
    },
    RunStarted {
        language: &'static str,
    },
    /// A `run()` request arrived while a run was already in flight.
    RunDropped {
        status: SessionStatus,
    },
    VerdictComputed {
        verdict: Verdict,
        predicted: bool,
    },
    CompletionNotified,
}

/// Emit an event as a single JSON log line.
pub fn emit(ids: &RunIds, event: &SessionEvent) {
    match serde_json::to_string(event) {
        Ok(payload) => log::info!(
            target: "gradebox::events",
            "session={} run={} {}",
            ids.session_id,
            ids.run_id,
            payload
        ),
        Err(err) => log::warn!(
            target: "gradebox::events",
            "failed to serialize event: {}",
            err
        ),
    }
}
