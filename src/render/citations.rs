//! Literature citations as a structured table

use crate::types::CitationRecord;
use leptos::prelude::*;

const PUBMED_BASE: &str = "https://pubmed.ncbi.nlm.nih.gov";
const MISSING: &str = "N/A";

/// First three author names joined with commas, with an "et al." marker
/// when the list is longer; "N/A" when absent
pub fn format_authors(authors: Option<&[String]>) -> String {
    match authors {
        Some(names) if !names.is_empty() => {
            let mut cell = names
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if names.len() > 3 {
                cell.push_str(" et al.");
            }
            cell
        }
        _ => MISSING.to_string(),
    }
}

/// Link fallback chain: an explicit `url` wins; otherwise a PubMed URL is
/// synthesized from `pmid`. This chain is the only way users reach
/// primary sources when the payload carries just an identifier.
pub fn citation_link(record: &CitationRecord) -> Option<(String, &'static str)> {
    if let Some(url) = record.url.as_ref().filter(|u| !u.trim().is_empty()) {
        return Some((url.clone(), "View"));
    }
    record
        .pmid
        .as_ref()
        .filter(|p| !p.trim().is_empty())
        .map(|pmid| (format!("{}/{}/", PUBMED_BASE, pmid), "PubMed"))
}

/// Research-paper table with Title/Authors/Source/Year/Link columns
#[component]
pub fn CitationTable(records: Vec<CitationRecord>) -> impl IntoView {
    let count = records.len();

    view! {
        <div class="mb-6">
            <h3 class="text-lg font-semibold text-[var(--text-primary)] mb-2 flex items-center gap-2">
                "📄 " {format!("Research Papers ({})", count)}
            </h3>
            <div class="overflow-x-auto border border-[var(--border-default)] rounded-lg">
                <table class="w-full text-sm text-left">
                    <thead class="bg-slate-800/60 text-[var(--text-muted)]">
                        <tr>
                            <th class="px-3 py-2 font-semibold">"Title"</th>
                            <th class="px-3 py-2 font-semibold">"Authors"</th>
                            <th class="px-3 py-2 font-semibold">"Source"</th>
                            <th class="px-3 py-2 font-semibold">"Year"</th>
                            <th class="px-3 py-2 font-semibold">"Link"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {records.into_iter().map(|record| {
                            let authors = format_authors(record.authors.as_deref());
                            let link = citation_link(&record);
                            view! {
                                <tr class="border-t border-[var(--border-default)] hover:bg-slate-800/40">
                                    <td class="px-3 py-2">
                                        {record.title.unwrap_or_else(|| MISSING.to_string())}
                                    </td>
                                    <td class="px-3 py-2">{authors}</td>
                                    <td class="px-3 py-2">
                                        {record.source.unwrap_or_else(|| MISSING.to_string())}
                                    </td>
                                    <td class="px-3 py-2">
                                        {record.pubdate.unwrap_or_else(|| MISSING.to_string())}
                                    </td>
                                    <td class="px-3 py-2">
                                        {match link {
                                            Some((href, label)) => view! {
                                                <a
                                                    href=href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-blue-400 hover:text-blue-300 inline-flex items-center gap-1"
                                                >
                                                    {label} " ↗"
                                                </a>
                                            }.into_any(),
                                            None => view! { <span>{MISSING}</span> }.into_any(),
                                        }}
                                    </td>
                                </tr>
                            }
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: Option<&str>, pmid: Option<&str>) -> CitationRecord {
        CitationRecord {
            url: url.map(String::from),
            pmid: pmid.map(String::from),
            ..CitationRecord::default()
        }
    }

    #[test]
    fn short_author_lists_join_verbatim() {
        let names = vec!["A".to_string(), "B".to_string()];
        assert_eq!(format_authors(Some(&names)), "A, B");
    }

    #[test]
    fn long_author_lists_truncate_with_et_al() {
        let names: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format_authors(Some(&names)), "A, B, C et al.");
    }

    #[test]
    fn absent_authors_show_placeholder() {
        assert_eq!(format_authors(None), "N/A");
        assert_eq!(format_authors(Some(&[])), "N/A");
    }

    #[test]
    fn explicit_url_wins_over_pmid() {
        let link = citation_link(&record(Some("https://doi.org/x"), Some("123")));
        assert_eq!(link, Some(("https://doi.org/x".to_string(), "View")));
    }

    #[test]
    fn pmid_synthesizes_pubmed_url() {
        let link = citation_link(&record(None, Some("123")));
        assert_eq!(
            link,
            Some(("https://pubmed.ncbi.nlm.nih.gov/123/".to_string(), "PubMed"))
        );
    }

    #[test]
    fn empty_url_falls_back_to_pmid() {
        let link = citation_link(&record(Some("  "), Some("456")));
        assert_eq!(
            link,
            Some(("https://pubmed.ncbi.nlm.nih.gov/456/".to_string(), "PubMed"))
        );
    }

    #[test]
    fn no_identifiers_means_no_link() {
        assert_eq!(citation_link(&record(None, None)), None);
    }
}
