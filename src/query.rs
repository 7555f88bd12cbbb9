//! Query lifecycle: submit → in flight → success or failure
//!
//! The controller is a small state machine over reactive signals, kept
//! separate from any component so the submission rules can be tested
//! without a rendering surface. Submission is single-flight: while a
//! request is outstanding, further submissions are ignored and the UI
//! disables the submit affordance.

use crate::api;
use crate::state::AppState;
use crate::types::{Provider, QueryRequest, ResearchResult};
use crate::usage;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Where the current query stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl QueryPhase {
    pub fn is_in_flight(self) -> bool {
        matches!(self, QueryPhase::Submitting)
    }
}

/// Gate for new submissions: non-empty text and no request in flight
pub fn accepts_submission(text: &str, in_flight: bool) -> bool {
    !text.trim().is_empty() && !in_flight
}

/// Drives one query at a time through its lifecycle
#[derive(Clone, Copy)]
pub struct QueryController {
    pub phase: RwSignal<QueryPhase>,
    /// Result of the most recent successful query; replaced wholesale
    pub result: RwSignal<Option<ResearchResult>>,
    /// User-facing message from the most recent failure
    pub error: RwSignal<Option<String>>,
}

impl QueryController {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(QueryPhase::Idle),
            result: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    /// Submit a research query. No-op on blank text or while a request
    /// is already in flight.
    pub fn submit(&self, state: AppState, text: String, provider: Provider) {
        let in_flight = self.phase.get_untracked().is_in_flight();
        if !accepts_submission(&text, in_flight) {
            return;
        }

        self.phase.set(QueryPhase::Submitting);
        self.error.set(None);

        let controller = *self;
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let request = QueryRequest {
                query: text.trim().to_string(),
                provider: provider.as_str().to_string(),
                model: None,
            };

            match api::process_query(&base, &request).await {
                Ok(resp) => {
                    // Commit the result before any stats update so the
                    // cost display never runs ahead of the result it
                    // reports on.
                    controller.result.set(Some(resp.data));
                    controller.phase.set(QueryPhase::Succeeded);
                    state.usage_stats.set(Some(resp.usage_stats));
                    usage::refresh_usage(state);
                }
                Err(message) => {
                    tracing::error!("query failed: {}", message);
                    // The previous result stays on screen; the error
                    // alert takes rendering precedence above it.
                    controller.error.set(Some(message));
                    controller.phase.set(QueryPhase::Failed);
                }
            }
        });
    }
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(!accepts_submission("", false));
        assert!(!accepts_submission("   ", false));
        assert!(!accepts_submission("\n\t ", false));
    }

    #[test]
    fn in_flight_requests_are_single_flight() {
        assert!(accepts_submission("abc", false));
        // A second submission while the first is outstanding is ignored
        assert!(!accepts_submission("abc", true));
    }

    #[test]
    fn idle_is_not_in_flight() {
        assert!(!QueryPhase::Idle.is_in_flight());
        assert!(QueryPhase::Submitting.is_in_flight());
        assert!(!QueryPhase::Succeeded.is_in_flight());
        assert!(!QueryPhase::Failed.is_in_flight());
    }
}
