//! Research page - query form plus adaptive results display

use crate::components::{Header, QueryPanel, ResultsPanel};
use crate::query::QueryController;
use crate::state::AppState;
use crate::usage::{UsageStatsPoller, DEFAULT_POLL_INTERVAL_MS};
use leptos::prelude::*;

/// Main research page wiring the controller and the usage poller
#[component]
pub fn ResearchPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let controller = QueryController::new();

    // Poll aggregate usage while this page is alive; the timer is
    // cancelled when the page is torn down
    let poller = send_wrapper::SendWrapper::new(UsageStatsPoller::start(state, DEFAULT_POLL_INTERVAL_MS));
    on_cleanup(move || poller.take().stop());

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="flex-1 w-full max-w-7xl mx-auto px-4 py-6">
                <div class="grid lg:grid-cols-3 gap-6 items-start">
                    <div class="lg:col-span-1">
                        <QueryPanel controller=controller />
                    </div>
                    <div class="lg:col-span-2">
                        <ResultsPanel controller=controller />
                    </div>
                </div>
            </main>
        </div>
    }
}
