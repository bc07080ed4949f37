//! Job-posting field extractor: fetch, pre-filter, ask the LLM for a fixed
//! JSON shape. The model's answer is returned as given; cleanup of company
//! and title strings only happens when the caller asks for it.

use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::ExtractConfig;
use crate::errors::AppError;
use crate::extraction::fetcher::{FetchError, PageFetcher};
use crate::extraction::html_filter::page_content;
use crate::extraction::prompts::{build_extract_prompt, extract_system};
use crate::llm_client::{CallOptions, LlmClient, LlmError};
use crate::text::{clean_company, clean_title};

const EXTRACT_MAX_TOKENS: u32 = 1_000;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("No LLM API key configured")]
    NotConfigured,
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Fetch(FetchError::Dns(host)) => {
                AppError::NotFound(format!("Could not resolve host '{host}'"))
            }
            ExtractError::Fetch(FetchError::Timeout) => {
                AppError::Timeout("Timed out fetching the job posting".to_string())
            }
            ExtractError::Fetch(FetchError::Status(403)) => {
                AppError::Forbidden("Access to the job posting was denied".to_string())
            }
            ExtractError::Fetch(FetchError::Status(404)) => {
                AppError::NotFound("Job posting not found".to_string())
            }
            ExtractError::Fetch(e) => AppError::Upstream(e.to_string()),
            ExtractError::Llm(e) => AppError::Llm(e.to_string()),
            ExtractError::NotConfigured => AppError::Llm("No LLM API key configured".to_string()),
        }
    }
}

/// Fields the LLM is asked for. `company` and `position` are always present
/// (empty when unknown); the rest are omitted when the page does not state them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedJob {
    #[serde(default, deserialize_with = "lenient_required")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_required")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_optional", skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional", skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional", skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional", skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
}

impl ExtractedJob {
    /// Strips job-board chrome from company and position.
    pub fn cleaned(self) -> Self {
        Self {
            company: clean_company(&self.company),
            position: clean_title(&self.position),
            ..self
        }
    }
}

/// Models answer with strings, numbers or null for the same field. Numbers
/// are rendered as written; null and blank strings mean absent.
fn lenient_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional(deserializer)?.unwrap_or_default())
}

pub struct JobPostingExtractor {
    fetcher: PageFetcher,
    llm: Option<LlmClient>,
    config: ExtractConfig,
}

impl JobPostingExtractor {
    pub fn new(fetcher: PageFetcher, llm: Option<LlmClient>, config: ExtractConfig) -> Self {
        Self {
            fetcher,
            llm,
            config,
        }
    }

    pub async fn extract(&self, url: &Url) -> Result<ExtractedJob, ExtractError> {
        let llm = self.llm.as_ref().ok_or(ExtractError::NotConfigured)?;

        let page = self.fetcher.fetch(url).await?;
        let content = page_content(&page.html, self.config.prefilter, self.config.max_chars);
        info!(
            "Extracting job fields from {} ({} chars after filtering)",
            page.final_url,
            content.chars().count()
        );

        let prompt = build_extract_prompt(url.as_str(), &content);
        let job: ExtractedJob = llm
            .call_json(
                &prompt,
                &extract_system(),
                CallOptions::deterministic(EXTRACT_MAX_TOKENS),
            )
            .await?;

        info!("Extracted '{}' at '{}'", job.position, job.company);
        Ok(job)
    }
}
