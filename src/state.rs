//! Global application state

use crate::types::{Provider, UsageStats};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

const STORAGE_KEY_PROVIDER: &str = "pharos_provider";

/// Global application state shared through context
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active LLM provider for new queries
    pub provider: RwSignal<Provider>,
    /// Latest aggregate usage statistics; last write wins
    pub usage_stats: RwSignal<Option<UsageStats>>,
    /// API base URL
    pub api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        let provider = LocalStorage::get::<String>(STORAGE_KEY_PROVIDER)
            .ok()
            .and_then(|stored| Provider::parse(&stored))
            .unwrap_or_default();

        Self {
            provider: RwSignal::new(provider),
            usage_stats: RwSignal::new(None),
            api_base: RwSignal::new("http://localhost:8000".to_string()),
        }
    }

    /// Switch provider and remember the choice across sessions
    pub fn select_provider(&self, provider: Provider) {
        let _ = LocalStorage::set(STORAGE_KEY_PROVIDER, provider.as_str());
        self.provider.set(provider);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
