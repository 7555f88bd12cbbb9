//! Free-form web source listings
//!
//! Source metadata is less uniform than citation metadata, so these
//! render as cards rather than a table.

use crate::types::SourceRecord;
use leptos::prelude::*;

/// Card list of web sources with optional snippet, provenance and link
#[component]
pub fn SourceList(records: Vec<SourceRecord>) -> impl IntoView {
    let count = records.len();

    view! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-[var(--text-primary)] mb-2 flex items-center gap-2">
                "🌐 " {format!("Web Sources ({})", count)}
            </h3>
            <div class="space-y-2">
                {records.into_iter().map(|record| view! {
                    <div class="p-3 border border-[var(--border-default)] rounded-lg hover:bg-slate-800/40">
                        <p class="font-medium text-sm text-[var(--text-primary)] mb-1">
                            {record.title.unwrap_or_else(|| "Untitled".to_string())}
                        </p>
                        {record.snippet.map(|snippet| view! {
                            <p class="text-sm text-[var(--text-muted)] mb-2">{snippet}</p>
                        })}
                        <div class="flex items-center gap-2 flex-wrap">
                            {record.source.map(|source| view! {
                                <span class="px-2 py-0.5 text-xs border border-[var(--border-default)] rounded-full text-[var(--text-muted)]">
                                    {source}
                                </span>
                            })}
                            {record.url.map(|url| view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm text-blue-400 hover:text-blue-300 inline-flex items-center gap-1"
                                >
                                    "Visit Source ↗"
                                </a>
                            })}
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
