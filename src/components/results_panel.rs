//! Results panel: error alert, empty state, progress and the rendered
//! multi-agent findings

use crate::api;
use crate::components::loading::ResearchProgress;
use crate::query::QueryController;
use crate::render::{AgentResultView, Markdown};
use crate::state::AppState;
use crate::types::ResearchResult;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Right-hand panel displaying the lifecycle of the current query
#[component]
pub fn ResultsPanel(controller: QueryController) -> impl IntoView {
    let state = expect_context::<AppState>();
    let results_end_ref = NodeRef::<leptos::html::Div>::new();

    // Auto-scroll to the end when a new result lands
    Effect::new(move |_| {
        if controller.result.get().is_some() {
            if let Some(el) = results_end_ref.get() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let in_flight = Signal::derive(move || controller.phase.get().is_in_flight());
    let is_empty =
        Signal::derive(move || controller.result.get().is_none() && !in_flight.get());

    let download_report = move |_| {
        let path = controller
            .result
            .get_untracked()
            .and_then(|results| results.report_path);
        if let Some(path) = path {
            let url = api::report_url(&state.api_base.get_untracked(), &path);
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        }
    };

    view! {
        <div class="card p-5 min-h-[600px]">
            // Error takes rendering precedence, above any retained result
            {move || controller.error.get().map(|message| view! {
                <div class="mb-4 px-4 py-3 rounded-lg border border-red-500/40 bg-red-500/10 text-red-300 text-sm">
                    {message}
                </div>
            })}

            <Show when=move || is_empty.get()>
                <div class="text-center py-16">
                    <p class="text-6xl mb-4">"🔬"</p>
                    <p class="text-xl font-medium text-[var(--text-primary)]">"Ready to Research"</p>
                    <p class="text-sm text-[var(--text-muted)] mt-1">
                        "Enter a query to start multi-agent pharmaceutical research"
                    </p>
                </div>
            </Show>

            <Show when=move || in_flight.get()>
                <ResearchProgress />
            </Show>

            {move || controller.result.get().map(|results| {
                let ResearchResult { query, plan, synthesis, agent_results, report_path } = results;
                view! {
                    <div>
                        <div class="flex items-center justify-between mb-3">
                            <h2 class="text-lg font-semibold text-[var(--text-primary)]">
                                "Research Results"
                            </h2>
                            {report_path.is_some().then(move || view! {
                                <button
                                    on:click=download_report
                                    class="px-3 py-1.5 text-sm bg-blue-600 hover:bg-blue-700 rounded-lg
                                           transition-colors flex items-center gap-1"
                                >
                                    "⬇ Download Report"
                                </button>
                            })}
                        </div>

                        // Query and planned intent
                        <div class="px-4 py-3 mb-3 bg-slate-800/60 rounded-lg">
                            <p class="text-sm font-medium text-blue-300">{format!("Query: {}", query)}</p>
                            <p class="text-xs text-[var(--text-muted)]">{format!("Intent: {}", plan.intent)}</p>
                        </div>

                        // Cross-agent synthesis
                        <div class="p-4 mb-4 border border-[var(--border-default)] rounded-lg">
                            <h3 class="text-lg font-semibold text-[var(--text-primary)] mb-2">
                                "Executive Summary"
                            </h3>
                            <Markdown source=synthesis />
                        </div>

                        <h3 class="text-lg font-semibold text-[var(--text-primary)] mb-2">
                            "Detailed Agent Findings"
                        </h3>
                        {agent_results.into_iter().map(|(agent_name, agent)| view! {
                            <div class="p-4 mb-3 border border-[var(--border-default)] rounded-lg">
                                <p class="text-sm font-semibold text-blue-400 mb-2">
                                    {agent_name.replace('_', " ").to_uppercase()}
                                </p>
                                <AgentResultView data=agent.data />
                            </div>
                        }).collect::<Vec<_>>()}

                        // Scroll anchor
                        <div node_ref=results_end_ref></div>
                    </div>
                }
            })}
        </div>
    }
}
