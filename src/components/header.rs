//! Header component

use crate::format::format_cost;
use crate::state::AppState;
use leptos::prelude::*;

/// Main application header with provider and running-cost chips
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <header class="header h-16 sticky top-0 z-40 border-b border-[var(--border-default)] glass">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                // Logo
                <a href="/" class="logo hover:opacity-80 transition-opacity flex items-center gap-3">
                    <span class="text-2xl">"🧬"</span>
                    <div>
                        <h1 class="text-xl font-bold text-gradient">"P.H.A.R.O.S"</h1>
                        <p class="text-xs text-[var(--text-muted)] -mt-0.5">
                            "Pharmaceutical Agentic Research"
                        </p>
                    </div>
                </a>

                // Status chips
                <div class="flex items-center gap-2">
                    <span class="px-3 py-1 text-xs rounded-full bg-violet-500/20 text-violet-300 border border-violet-500/40">
                        {move || state.provider.get().label()}
                    </span>
                    {move || state.usage_stats.get().map(|stats| view! {
                        <span class="px-3 py-1 text-xs rounded-full bg-amber-500/20 text-amber-300 border border-amber-500/40">
                            {format_cost(stats.total_cost_usd)}
                        </span>
                    })}
                </div>
            </div>
        </header>
    }
}
