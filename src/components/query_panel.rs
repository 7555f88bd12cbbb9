//! Query form: provider selection, query text, sample queries and a
//! usage-statistics block

use crate::components::loading::LoadingSpinner;
use crate::format::{format_cost, format_number};
use crate::query::QueryController;
use crate::state::AppState;
use crate::types::Provider;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

const SAMPLE_QUERIES: [&str; 4] = [
    "Find molecules for treating rare respiratory diseases with low competition",
    "Identify repurposing opportunities for metformin in oncology",
    "Analyze patent landscape for GLP-1 agonists",
    "Research unmet needs in pediatric inflammatory diseases",
];

/// Left-hand research form panel
#[component]
pub fn QueryPanel(controller: QueryController) -> impl IntoView {
    let state = expect_context::<AppState>();
    let input = RwSignal::new(String::new());

    let in_flight = Signal::derive(move || controller.phase.get().is_in_flight());
    let submit_disabled =
        Signal::derive(move || in_flight.get() || input.get().trim().is_empty());

    let on_provider_change = move |ev: web_sys::Event| {
        let selected = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value());
        if let Some(provider) = selected.as_deref().and_then(Provider::parse) {
            state.select_provider(provider);
        }
    };

    let submit = move || {
        controller.submit(state, input.get_untracked(), state.provider.get_untracked());
    };

    let submit_for_click = submit.clone();
    let on_submit_click = move |_| submit_for_click();

    // Ctrl/Cmd+Enter submits from inside the textarea
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="card p-5">
            <h2 class="text-lg font-semibold text-[var(--text-primary)] mb-4 flex items-center gap-2">
                "📊 Research Query"
            </h2>

            // Provider selection
            <label class="block text-xs text-[var(--text-muted)] mb-1">"AI Provider"</label>
            <select
                on:change=on_provider_change
                class="w-full mb-3 px-3 py-2 bg-slate-900 border border-slate-700 rounded-lg
                       text-sm text-slate-100 focus:outline-none focus:ring-2 focus:ring-blue-500"
            >
                <option
                    value="openai"
                    selected=move || state.provider.get() == Provider::OpenAi
                >
                    {Provider::OpenAi.label()}
                </option>
                <option
                    value="gemini"
                    selected=move || state.provider.get() == Provider::Gemini
                >
                    {Provider::Gemini.label()}
                </option>
            </select>

            // Query text
            <textarea
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
                rows="6"
                placeholder="Enter your pharmaceutical research query..."
                class="w-full mb-3 px-3 py-2 bg-slate-900 border border-slate-700 rounded-lg resize-none
                       text-sm text-slate-100 placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
            ></textarea>

            // Single-flight: disabled while a request is outstanding
            <button
                on:click=on_submit_click
                disabled=move || submit_disabled.get()
                class="w-full py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-700
                       disabled:cursor-not-allowed rounded-lg font-medium transition-colors
                       flex items-center justify-center gap-2"
            >
                {move || if in_flight.get() {
                    view! { <LoadingSpinner /> <span>"Researching..."</span> }.into_any()
                } else {
                    view! { <span>"Start Research"</span> }.into_any()
                }}
            </button>

            <div class="border-t border-[var(--border-default)] my-4"></div>

            // Sample queries
            <p class="text-xs text-[var(--text-muted)] mb-2">"Sample Queries:"</p>
            <div class="flex flex-wrap gap-2">
                {SAMPLE_QUERIES.iter().map(|sample| {
                    let sample = *sample;
                    view! {
                        <button
                            on:click=move |_| input.set(sample.to_string())
                            class="px-2 py-1 text-xs text-left border border-slate-700 rounded-full
                                   text-[var(--text-muted)] hover:bg-slate-800 transition-colors"
                        >
                            {sample}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            // Usage statistics
            {move || state.usage_stats.get().map(|stats| view! {
                <div class="mt-5">
                    <p class="text-xs font-semibold text-[var(--text-primary)] mb-1">
                        "Usage Statistics:"
                    </p>
                    <p class="text-xs text-[var(--text-muted)]">
                        {format!(
                            "OpenAI: {} tokens ({})",
                            format_number(stats.tokens_used.openai),
                            format_cost(stats.total_cost.openai),
                        )}
                    </p>
                    <p class="text-xs text-[var(--text-muted)]">
                        {format!(
                            "Gemini: {} tokens ({})",
                            format_number(stats.tokens_used.gemini),
                            format_cost(stats.total_cost.gemini),
                        )}
                    </p>
                </div>
            })}
        </div>
    }
}
