//! Shape classification for opaque agent payloads
//!
//! Each agent returns a payload of unknown shape: markdown prose, a
//! structured object mixing citation tables, source listings and scalar
//! stats, or anything else entirely. This module is the single place
//! where those shape assumptions live. `classify` inspects a payload and
//! produces an ordered list of sections for the rendering engine; it is
//! total over arbitrary JSON and never fails — unrecognized content
//! degrades to a generic pretty-printed field instead of being dropped.

use crate::format::humanize_key;
use crate::types::{CitationRecord, SourceRecord};
use serde_json::{Map, Value};

/// Fields claimed by specialized sections; the generic pass skips these
const RESERVED_FIELDS: [&str; 7] = [
    "summary",
    "pubmed_papers",
    "web_sources",
    "total_sources",
    "key_papers",
    "analysis_type",
    "analysis",
];

/// One renderable section of an agent's result, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Whole-payload markdown prose, rendered without a heading
    Markdown(String),
    /// The `summary` field of a structured payload, titled "Summary"
    Summary(String),
    /// Literature citations rendered as a table
    Citations(Vec<CitationRecord>),
    /// Free-form web sources rendered as cards
    Sources(Vec<SourceRecord>),
    /// Scalar stat chips (total sources, key papers, analysis type)
    Stats(Vec<StatChip>),
    /// Fallback for any field no specialized renderer claimed
    Field { label: String, value: FieldValue },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatChip {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Scalar rendered as plain text
    Text(String),
    /// Object or array pretty-printed into a monospace block
    Json(String),
}

/// Decide how to present a payload. Top-level branches are mutually
/// exclusive; within the structured branch, sections are additive and
/// specialized sections always precede the generic fallback.
pub fn classify(payload: &Value) -> Vec<Section> {
    match payload {
        Value::String(text) => vec![Section::Markdown(text.clone())],
        Value::Object(fields) => {
            // An `analysis` string short-circuits everything else; the
            // sibling fields are intentionally discarded.
            if let Some(Value::String(analysis)) = fields.get("analysis") {
                return vec![Section::Markdown(analysis.clone())];
            }
            classify_structured(fields)
        }
        Value::Null => Vec::new(),
        other => vec![Section::Field {
            label: "Data".to_string(),
            value: field_value(other),
        }],
    }
}

fn classify_structured(fields: &Map<String, Value>) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(Value::String(summary)) = fields.get("summary") {
        sections.push(Section::Summary(summary.clone()));
    }

    if let Some(Value::Array(items)) = fields.get("pubmed_papers") {
        if !items.is_empty() {
            sections.push(Section::Citations(
                items.iter().map(citation_from).collect(),
            ));
        }
    }

    if let Some(Value::Array(items)) = fields.get("web_sources") {
        if !items.is_empty() {
            sections.push(Section::Sources(items.iter().map(source_from).collect()));
        }
    }

    let chips: Vec<StatChip> = [
        ("Total Sources", "total_sources"),
        ("Key Papers", "key_papers"),
        ("Type", "analysis_type"),
    ]
    .into_iter()
    .filter_map(|(label, key)| {
        fields
            .get(key)
            .filter(|v| !v.is_null())
            .map(|v| StatChip {
                label,
                value: scalar_text(v),
            })
    })
    .collect();
    if !chips.is_empty() {
        sections.push(Section::Stats(chips));
    }

    for (key, value) in fields {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if value.is_null() {
            continue;
        }
        if matches!(value, Value::Object(map) if map.is_empty()) {
            continue;
        }
        sections.push(Section::Field {
            label: humanize_key(key),
            value: field_value(value),
        });
    }

    sections
}

fn field_value(value: &Value) -> FieldValue {
    match value {
        Value::Object(_) | Value::Array(_) => FieldValue::Json(
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        ),
        Value::String(text) => FieldValue::Text(text.clone()),
        other => FieldValue::Text(other.to_string()),
    }
}

/// Stringify a scalar leniently; compound values fall back to compact JSON
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn opt_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn field_string(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(opt_string)
}

/// Build a citation record from an arbitrary array element. Non-object
/// elements and type-mismatched fields degrade to empty records rather
/// than failing.
fn citation_from(value: &Value) -> CitationRecord {
    let Value::Object(fields) = value else {
        return CitationRecord::default();
    };
    CitationRecord {
        title: field_string(fields, "title"),
        authors: match fields.get("authors") {
            Some(Value::Array(names)) => Some(names.iter().filter_map(opt_string).collect()),
            _ => None,
        },
        source: field_string(fields, "source"),
        pubdate: field_string(fields, "pubdate"),
        url: field_string(fields, "url"),
        pmid: field_string(fields, "pmid"),
    }
}

fn source_from(value: &Value) -> SourceRecord {
    let Value::Object(fields) = value else {
        return SourceRecord::default();
    };
    SourceRecord {
        title: field_string(fields, "title"),
        snippet: field_string(fields, "snippet"),
        source: field_string(fields, "source"),
        url: field_string(fields, "url"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_payload_is_pure_markdown() {
        let sections = classify(&json!("## Heading\n\nprose"));
        assert_eq!(sections, vec![Section::Markdown("## Heading\n\nprose".into())]);
    }

    #[test]
    fn analysis_field_wins_and_siblings_are_discarded() {
        let sections = classify(&json!({ "analysis": "X", "other": "Y" }));
        assert_eq!(sections, vec![Section::Markdown("X".into())]);
    }

    #[test]
    fn non_string_analysis_falls_through_to_structured() {
        let sections = classify(&json!({ "analysis": { "nested": true }, "summary": "S" }));
        assert_eq!(sections[0], Section::Summary("S".into()));
        // the object-typed analysis field is reserved, so it never shows
        // up as a generic field either
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn structured_sections_come_in_fixed_order() {
        let sections = classify(&json!({
            "extra_metric": 42,
            "summary": "S",
            "web_sources": [{ "title": "W" }],
            "pubmed_papers": [{ "title": "P" }],
            "total_sources": 7
        }));

        assert!(matches!(sections[0], Section::Summary(_)));
        assert!(matches!(sections[1], Section::Citations(_)));
        assert!(matches!(sections[2], Section::Sources(_)));
        assert!(matches!(sections[3], Section::Stats(_)));
        assert_eq!(
            sections[4],
            Section::Field {
                label: "Extra Metric".into(),
                value: FieldValue::Text("42".into())
            }
        );
    }

    #[test]
    fn summary_precedes_generic_fields() {
        let sections = classify(&json!({ "summary": "S", "extra_metric": 42 }));
        assert_eq!(sections[0], Section::Summary("S".into()));
        assert!(matches!(sections[1], Section::Field { .. }));
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn empty_sequences_render_nothing() {
        let sections = classify(&json!({ "pubmed_papers": [], "web_sources": [] }));
        assert!(sections.is_empty());
    }

    #[test]
    fn non_array_paper_field_is_not_a_table() {
        let sections = classify(&json!({ "pubmed_papers": "twelve" }));
        // reserved but mis-typed: no citation table and no generic dump
        assert!(sections.is_empty());
    }

    #[test]
    fn stats_row_appears_when_any_stat_is_present() {
        let sections = classify(&json!({ "analysis_type": "landscape" }));
        assert_eq!(
            sections,
            vec![Section::Stats(vec![StatChip {
                label: "Type",
                value: "landscape".into()
            }])]
        );
    }

    #[test]
    fn null_and_empty_object_fields_are_skipped() {
        let sections = classify(&json!({
            "empty": {},
            "nothing": null,
            "kept": "value"
        }));
        assert_eq!(
            sections,
            vec![Section::Field {
                label: "Kept".into(),
                value: FieldValue::Text("value".into())
            }]
        );
    }

    #[test]
    fn compound_fields_pretty_print() {
        let sections = classify(&json!({ "trials": { "phase": 3 } }));
        match &sections[0] {
            Section::Field { label, value: FieldValue::Json(pretty) } => {
                assert_eq!(label, "Trials");
                assert!(pretty.contains("\"phase\": 3"));
            }
            other => panic!("expected pretty-printed field, got {:?}", other),
        }
    }

    #[test]
    fn citations_tolerate_missing_and_mistyped_fields() {
        let sections = classify(&json!({
            "pubmed_papers": [
                { "pmid": 123, "authors": ["A", 1, "B"] },
                "not an object"
            ]
        }));
        match &sections[0] {
            Section::Citations(records) => {
                assert_eq!(records[0].pmid.as_deref(), Some("123"));
                assert_eq!(records[0].authors, Some(vec!["A".into(), "1".into(), "B".into()]));
                assert!(records[0].title.is_none());
                assert_eq!(records[1], CitationRecord::default());
            }
            other => panic!("expected citations, got {:?}", other),
        }
    }

    #[test]
    fn classification_is_total_over_arbitrary_json() {
        let weird = vec![
            json!(null),
            json!(42),
            json!(true),
            json!([1, { "a": [null] }, "x"]),
            json!({ "deep": { "deeper": { "deepest": [1, 2, 3] } } }),
            json!({ "summary": 12, "pubmed_papers": { "oops": true } }),
        ];
        for payload in weird {
            // must not panic, and top-level scalars/arrays keep their data
            let sections = classify(&payload);
            if !payload.is_null() && !payload.is_object() {
                assert_eq!(sections.len(), 1);
            }
        }
    }

    #[test]
    fn null_payload_renders_no_sections() {
        assert!(classify(&Value::Null).is_empty());
    }

    #[test]
    fn scalar_payload_degrades_to_generic_field() {
        let sections = classify(&json!(42));
        assert_eq!(
            sections,
            vec![Section::Field {
                label: "Data".into(),
                value: FieldValue::Text("42".into())
            }]
        );
    }
}
