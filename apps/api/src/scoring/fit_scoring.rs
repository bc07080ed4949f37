//! Fit scoring: pluggable, trait-based scorer that measures a candidate
//! profile against a job description.
//!
//! Default: `KeywordFitScorer` (pure-Rust, fast, deterministic, never fails).
//! Optional: `LlmFitScorer` (see `llm_scorer.rs`), composed with the keyword
//! scorer through `score_with_fallback` so callers always get a result.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::llm_client::LlmError;
use crate::text::{extract_keywords, keywords_overlap};

/// Upper bound on reported missing keywords.
pub const MAX_MISSING_KEYWORDS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Input / output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl CandidateProfile {
    /// Skills and summary as one text blob for keyword extraction.
    pub fn as_text(&self) -> String {
        let mut text = self.skills.join(" ");
        if let Some(summary) = self.summary.as_deref() {
            text.push(' ');
            text.push_str(summary);
        }
        text
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitScoreRequest {
    pub job_description: String,
    pub profile: CandidateProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitScoreResult {
    pub fit_score: u32, // 0 – 100
    pub missing_keywords: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Error)]
pub enum FitScoreError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Could not parse a fit score from the model reply")]
    UnparseableReply,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer trait. Implement this to swap backends without touching
/// the handler or caller code.
#[async_trait]
pub trait FitScorer: Send + Sync {
    async fn score(&self, request: &FitScoreRequest) -> Result<FitScoreResult, FitScoreError>;

    /// Short label for logs ("keyword" | "llm").
    fn backend(&self) -> &'static str;
}

/// Pure keyword-overlap scorer. Never returns an error.
pub struct KeywordFitScorer;

#[async_trait]
impl FitScorer for KeywordFitScorer {
    async fn score(&self, request: &FitScoreRequest) -> Result<FitScoreResult, FitScoreError> {
        Ok(analyze_job_fit(request))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Runs `primary`; on any error logs it and answers with the keyword scorer.
pub async fn score_with_fallback(
    primary: &dyn FitScorer,
    request: &FitScoreRequest,
) -> FitScoreResult {
    match primary.score(request).await {
        Ok(result) => result,
        Err(e) => {
            warn!(
                "{} fit scorer failed, falling back to keywords: {e}",
                primary.backend()
            );
            analyze_job_fit(request)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword fit algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Extracts keywords from both sides and scores the overlap.
pub fn analyze_job_fit(request: &FitScoreRequest) -> FitScoreResult {
    let job_keywords = extract_keywords(&request.job_description);
    let profile_keywords = extract_keywords(&request.profile.as_text());

    let fit_score = calculate_fit_score(&job_keywords, &profile_keywords);
    let missing_keywords = missing_keywords(&job_keywords, &profile_keywords);
    let notes = generate_notes(fit_score, &missing_keywords).to_string();

    FitScoreResult {
        fit_score,
        missing_keywords,
        notes,
    }
}

fn is_matched(job_keyword: &str, profile_keywords: &[String]) -> bool {
    profile_keywords
        .iter()
        .any(|p| keywords_overlap(job_keyword, p))
}

/// Percentage of job keywords covered by any profile keyword, rounded.
/// An empty job keyword set scores 0.
pub fn calculate_fit_score(job_keywords: &[String], profile_keywords: &[String]) -> u32 {
    if job_keywords.is_empty() {
        return 0;
    }
    let matched = job_keywords
        .iter()
        .filter(|kw| is_matched(kw, profile_keywords))
        .count();
    ((matched as f64 / job_keywords.len() as f64) * 100.0).round() as u32
}

/// Unmatched job keywords in job-description order, at most ten.
pub fn missing_keywords(job_keywords: &[String], profile_keywords: &[String]) -> Vec<String> {
    job_keywords
        .iter()
        .filter(|kw| !is_matched(kw, profile_keywords))
        .take(MAX_MISSING_KEYWORDS)
        .cloned()
        .collect()
}

/// Score brackets, highest first. The first bracket whose floor the score
/// reaches wins.
pub const NOTE_BRACKETS: &[(u32, &str)] = &[
    (
        80,
        "Excellent match! Your profile aligns strongly with this role's requirements.",
    ),
    (
        60,
        "Good match. You cover most of the key requirements; consider highlighting related experience.",
    ),
    (
        40,
        "Moderate match. Tailor your resume to address the missing keywords before applying.",
    ),
    (
        0,
        "Low match. This role asks for several skills your profile does not mention yet.",
    ),
];

/// Canned recommendation for a score. Missing keywords are accepted for
/// signature stability but not interpolated.
pub fn generate_notes(fit_score: u32, _missing_keywords: &[String]) -> &'static str {
    NOTE_BRACKETS
        .iter()
        .find(|(floor, _)| fit_score >= *floor)
        .map(|(_, message)| *message)
        .unwrap_or(NOTE_BRACKETS[NOTE_BRACKETS.len() - 1].1)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
