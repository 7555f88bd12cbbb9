//! Ordered rendering of one agent's classified result
//!
//! Pure with respect to its input: the same payload always produces the
//! same ordered output. All shape decisions happen in `classify`; this
//! component only maps sections to views.

use super::citations::CitationTable;
use super::classify::{classify, Section, StatChip};
use super::generic::GenericField;
use super::markdown::Markdown;
use super::sources::SourceList;
use leptos::prelude::*;
use serde_json::Value;

/// Render an agent payload section by section
#[component]
pub fn AgentResultView(data: Value) -> impl IntoView {
    let sections = classify(&data);

    view! {
        <div>
            {sections.into_iter().map(|section| match section {
                Section::Markdown(text) => view! {
                    <Markdown source=text />
                }.into_any(),
                Section::Summary(text) => view! {
                    <div class="mb-6">
                        <h3 class="text-lg font-semibold text-[var(--text-primary)] mb-2">"Summary"</h3>
                        <Markdown source=text />
                    </div>
                }.into_any(),
                Section::Citations(records) => view! {
                    <CitationTable records=records />
                }.into_any(),
                Section::Sources(records) => view! {
                    <SourceList records=records />
                }.into_any(),
                Section::Stats(chips) => view! {
                    <StatChipRow chips=chips />
                }.into_any(),
                Section::Field { label, value } => view! {
                    <GenericField label=label value=value />
                }.into_any(),
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Row of scalar stat chips
#[component]
fn StatChipRow(chips: Vec<StatChip>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 flex-wrap mb-6 pt-3 border-t border-[var(--border-default)]">
            {chips.into_iter().map(|chip| view! {
                <span class="px-3 py-1 text-xs border border-blue-500/40 text-blue-300 rounded-full">
                    {format!("{}: {}", chip.label, chip.value)}
                </span>
            }).collect::<Vec<_>>()}
        </div>
    }
}
