//! Background polling of aggregate usage statistics
//!
//! Usage numbers are advisory: refresh failures are logged and swallowed
//! so they can never block or fail the query flow.

use crate::api;
use crate::state::AppState;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Default refresh cadence
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;

/// Fetch usage stats once and update the shared slot
pub fn refresh_usage(state: AppState) {
    spawn_local(async move {
        let base = state.api_base.get_untracked();
        match api::fetch_usage(&base).await {
            Ok(stats) => state.usage_stats.set(Some(stats)),
            Err(e) => tracing::warn!("failed to refresh usage stats: {}", e),
        }
    });
}

/// Handle for the periodic poller. Dropping it cancels the timer, so a
/// page ties the poller to its lifetime with `on_cleanup`.
pub struct UsageStatsPoller {
    _interval: Interval,
}

impl UsageStatsPoller {
    /// Start polling: one immediate refresh, then one every `period_ms`
    pub fn start(state: AppState, period_ms: u32) -> Self {
        refresh_usage(state);
        let interval = Interval::new(period_ms, move || refresh_usage(state));
        Self { _interval: interval }
    }

    /// Stop polling; equivalent to dropping the handle
    pub fn stop(self) {}
}
