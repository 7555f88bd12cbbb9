//! PHAROS Research UI - Leptos frontend
//!
//! Client for the PHAROS multi-agent pharmaceutical research backend:
//! submit a free-text query, watch the agent pipeline run, and get each
//! agent's findings rendered adaptively regardless of payload shape.

pub mod api;
pub mod components;
pub mod format;
pub mod pages;
pub mod query;
pub mod render;
pub mod state;
pub mod types;
pub mod usage;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::ResearchPage;
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ResearchPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
