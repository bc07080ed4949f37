//! Axum route handlers for the extraction API.

use axum::{
    extract::{Query, State},
    Json,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::extractor::ExtractedJob;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractQuery {
    pub url: Option<String>,
    /// Apply company/title cleanup to the model's answer.
    #[serde(default)]
    pub clean: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    #[serde(flatten)]
    pub job: ExtractedJob,
    pub job_url: String,
}

/// Accepts absolute http(s) URLs only.
fn parse_posting_url(raw: Option<&str>) -> Result<Url, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Missing required query parameter 'url'".to_string()))?;

    let url = Url::parse(raw).map_err(|_| AppError::Validation(format!("Invalid URL: {raw}")))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(AppError::Validation(format!(
            "URL must be an absolute http(s) address: {raw}"
        ))),
    }
}

/// GET /api/extract?url=<posting>[&clean=true]
pub async fn handle_extract(
    State(state): State<AppState>,
    Query(query): Query<ExtractQuery>,
) -> Result<Json<ExtractResponse>, AppError> {
    let url = parse_posting_url(query.url.as_deref())?;

    let mut job = state.extractor.extract(&url).await?;
    if query.clean {
        job = job.cleaned();
    }

    Ok(Json(ExtractResponse {
        job,
        job_url: url.to_string(),
    }))
}

/// Any non-GET method on the extract route.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(parse_posting_url(Some("https://jobs.example.com/123")).is_ok());
        assert!(parse_posting_url(Some("  http://example.com  ")).is_ok());
        assert!(matches!(parse_posting_url(None), Err(AppError::Validation(_))));
        assert!(matches!(parse_posting_url(Some("")), Err(AppError::Validation(_))));
        assert!(matches!(
            parse_posting_url(Some("not a url")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_posting_url(Some("ftp://example.com/file")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_posting_url(Some("mailto:hr@example.com")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_response_carries_job_url() {
        let response = ExtractResponse {
            job: ExtractedJob {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                hourly_rate: Some("$40".to_string()),
                ..ExtractedJob::default()
            },
            job_url: "https://jobs.example.com/1".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["jobUrl"], "https://jobs.example.com/1");
        assert_eq!(json["hourlyRate"], "$40");
        assert_eq!(json["company"], "Acme");
    }
}
