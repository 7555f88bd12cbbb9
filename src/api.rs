//! API client for communicating with the PHAROS research backend

use crate::types::{ApiError, QueryRequest, QueryResponse, UsageStats};
use gloo_net::http::{Request, Response};

/// Fallback message when the server gives us nothing usable
pub const GENERIC_ERROR: &str = "An error occurred";

/// Pull the human-readable `detail` field out of an error body, if present
pub fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .map(|err| err.detail)
        .filter(|detail| !detail.is_empty())
}

/// Basename of a server-side report path, used as the download key
pub fn report_filename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// URL for fetching a generated report in a new browsing context
pub fn report_url(base_url: &str, report_path: &str) -> String {
    format!("{}/api/reports/{}", base_url, report_filename(report_path))
}

async fn error_from_response(resp: Response) -> String {
    let status = resp.status();
    match resp.text().await {
        Ok(body) => extract_detail(&body).unwrap_or_else(|| GENERIC_ERROR.to_string()),
        Err(_) => format!("Request failed with status {}", status),
    }
}

/// Submit a research query and wait for the full multi-agent response
pub async fn process_query(base_url: &str, request: &QueryRequest) -> Result<QueryResponse, String> {
    let url = format!("{}/api/query", base_url);
    let req = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }

    resp.json::<QueryResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch aggregate usage statistics
pub async fn fetch_usage(base_url: &str) -> Result<UsageStats, String> {
    let url = format!("{}/api/usage", base_url);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }

    resp.json::<UsageStats>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_extracted_verbatim() {
        assert_eq!(
            extract_detail(r#"{"detail":"rate limited"}"#),
            Some("rate limited".to_string())
        );
    }

    #[test]
    fn missing_or_malformed_detail_yields_none() {
        assert_eq!(extract_detail(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_detail("not json"), None);
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
    }

    #[test]
    fn report_filename_takes_basename() {
        assert_eq!(report_filename("/tmp/reports/run_42.pdf"), "run_42.pdf");
        assert_eq!(report_filename("run_42.pdf"), "run_42.pdf");
    }

    #[test]
    fn report_url_targets_reports_endpoint() {
        assert_eq!(
            report_url("http://localhost:8000", "/data/reports/summary.pdf"),
            "http://localhost:8000/api/reports/summary.pdf"
        );
    }
}
