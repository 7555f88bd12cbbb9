//! API types matching the PHAROS research backend

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// LLM provider backing a research run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    OpenAi,
    Gemini,
}

impl Provider {
    /// Wire value expected by the backend
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
        }
    }

    /// Human-facing label for chips and selects
    pub fn label(self) -> &'static str {
        match self {
            Provider::OpenAi => "ChatGPT (GPT-4)",
            Provider::Gemini => "Gemini 2.5 Flash",
        }
    }

    pub fn parse(value: &str) -> Option<Provider> {
        match value {
            "openai" => Some(Provider::OpenAi),
            "gemini" => Some(Provider::Gemini),
            _ => None,
        }
    }
}

/// Query submission body for `POST /api/query`
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Envelope returned by `POST /api/query`
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub data: ResearchResult,
    #[serde(default)]
    pub usage_stats: UsageStats,
}

/// One completed research run
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearchResult {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub plan: QueryPlan,
    #[serde(default)]
    pub synthesis: String,
    #[serde(default)]
    pub agent_results: IndexMap<String, AgentResult>,
    #[serde(default)]
    pub report_path: Option<String>,
}

/// The master agent's execution plan
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryPlan {
    #[serde(default)]
    pub intent: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A single agent's contribution; the payload shape varies per agent
/// and is only interpreted by the rendering engine
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentResult {
    #[serde(default)]
    pub data: Value,
}

/// Aggregate cost and token usage across all providers
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UsageStats {
    #[serde(default)]
    pub total_cost_usd: f64,
    #[serde(default)]
    pub tokens_used: TokenBreakdown,
    #[serde(default)]
    pub total_cost: CostBreakdown,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TokenBreakdown {
    #[serde(default)]
    pub openai: u64,
    #[serde(default)]
    pub gemini: u64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CostBreakdown {
    #[serde(default)]
    pub openai: f64,
    #[serde(default)]
    pub gemini: f64,
}

/// Error body returned by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub detail: String,
}

/// A literature citation as emitted by the literature-search agent.
/// Every field is optional; missing values render as placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitationRecord {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub source: Option<String>,
    pub pubdate: Option<String>,
    pub url: Option<String>,
    pub pmid: Option<String>,
}

/// A free-form web source reference
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRecord {
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_response_parses_full_envelope() {
        let body = json!({
            "data": {
                "query": "metformin repurposing",
                "plan": { "intent": "drug_repurposing", "agents": ["literature"] },
                "synthesis": "## Findings",
                "agent_results": {
                    "literature_search": { "data": { "summary": "ok" } },
                    "patent_analysis": { "data": "markdown prose" }
                },
                "report_path": "/reports/run_42.pdf"
            },
            "usage_stats": {
                "total_cost_usd": 0.1234,
                "tokens_used": { "openai": 1500, "gemini": 0 },
                "total_cost": { "openai": 0.1234, "gemini": 0.0 }
            }
        });

        let resp: QueryResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.data.plan.intent, "drug_repurposing");
        assert_eq!(resp.data.report_path.as_deref(), Some("/reports/run_42.pdf"));
        assert_eq!(resp.usage_stats.tokens_used.openai, 1500);
        assert!(resp.data.agent_results["patent_analysis"].data.is_string());
    }

    #[test]
    fn agent_results_keep_backend_order() {
        let body = json!({
            "data": {
                "agent_results": {
                    "zeta": { "data": "1" },
                    "alpha": { "data": "2" },
                    "mid": { "data": "3" }
                }
            }
        });

        let resp: QueryResponse = serde_json::from_value(body).unwrap();
        let names: Vec<&str> = resp.data.agent_results.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn missing_sections_default_instead_of_failing() {
        let resp: QueryResponse = serde_json::from_value(json!({ "data": {} })).unwrap();
        assert!(resp.data.synthesis.is_empty());
        assert!(resp.data.agent_results.is_empty());
        assert!(resp.data.report_path.is_none());
        assert_eq!(resp.usage_stats, UsageStats::default());
    }

    #[test]
    fn provider_round_trips_wire_values() {
        assert_eq!(Provider::parse("openai"), Some(Provider::OpenAi));
        assert_eq!(Provider::parse("gemini"), Some(Provider::Gemini));
        assert_eq!(Provider::parse("claude"), None);
        assert_eq!(Provider::Gemini.as_str(), "gemini");
    }

    #[test]
    fn query_request_omits_absent_model() {
        let req = QueryRequest {
            query: "q".into(),
            provider: "openai".into(),
            model: None,
        };
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(wire, json!({ "query": "q", "provider": "openai" }));
    }
}
