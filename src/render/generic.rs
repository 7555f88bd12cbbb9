//! Fallback key-value rendering for unrecognized fields
//!
//! Safety net beneath the specialized renderers: whatever the classifier
//! doesn't specifically understand still reaches the screen, either as
//! plain text or as a pretty-printed JSON block.

use super::classify::FieldValue;
use leptos::prelude::*;

/// One unclaimed field with a humanized label
#[component]
pub fn GenericField(label: String, value: FieldValue) -> impl IntoView {
    view! {
        <div class="mb-4">
            <h4 class="text-sm font-semibold text-[var(--text-primary)] mb-1">{label}</h4>
            {match value {
                FieldValue::Json(pretty) => view! {
                    <pre class="bg-slate-900 border border-[var(--border-default)] rounded-lg p-3 overflow-x-auto text-xs font-mono text-[var(--text-muted)]">
                        <code>{pretty}</code>
                    </pre>
                }.into_any(),
                FieldValue::Text(text) => view! {
                    <p class="text-sm text-[var(--text-muted)]">{text}</p>
                }.into_any(),
            }}
        </div>
    }
}
