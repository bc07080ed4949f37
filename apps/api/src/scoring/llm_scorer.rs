//! LLM-backed fit scorer. Fails on transport errors and on replies without a
//! score; wrap it with `score_with_fallback` wherever a result is required.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::llm_client::{CallOptions, LlmClient};
use crate::scoring::fit_scoring::{
    generate_notes, FitScoreError, FitScoreRequest, FitScoreResult, FitScorer,
    MAX_MISSING_KEYWORDS,
};
use crate::scoring::prompts::{FIT_SCORE_PROMPT_TEMPLATE, FIT_SCORE_SYSTEM};

const FIT_SCORE_MAX_TOKENS: u32 = 300;

pub struct LlmFitScorer {
    llm: LlmClient,
}

impl LlmFitScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl FitScorer for LlmFitScorer {
    async fn score(&self, request: &FitScoreRequest) -> Result<FitScoreResult, FitScoreError> {
        let prompt = build_prompt(request);
        let reply = self
            .llm
            .call_text(
                &prompt,
                FIT_SCORE_SYSTEM,
                CallOptions::deterministic(FIT_SCORE_MAX_TOKENS),
            )
            .await?;
        debug!("LLM fit reply: {reply}");
        parse_fit_reply(&reply)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

fn build_prompt(request: &FitScoreRequest) -> String {
    FIT_SCORE_PROMPT_TEMPLATE
        .replace("{job_description}", &request.job_description)
        .replace("{skills}", &request.profile.skills.join(", "))
        .replace(
            "{summary}",
            request.profile.summary.as_deref().unwrap_or("(none)"),
        )
}

fn score_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)fit\s*score\s*[:=\-]?\s*\**\s*(\d{1,3})").expect("valid score regex")
    })
}

fn missing_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?im)missing\s*keywords?\s*[:=\-]?\s*\**\s*(.*)$")
            .expect("valid missing-keywords regex")
    })
}

/// Pulls `Fit Score: N` and `Missing Keywords: a, b` out of a free-text reply.
/// A reply without a score is an error; a missing keyword line means none.
pub fn parse_fit_reply(reply: &str) -> Result<FitScoreResult, FitScoreError> {
    let fit_score = score_regex()
        .captures(reply)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or(FitScoreError::UnparseableReply)?
        .min(100);

    let missing_keywords: Vec<String> = missing_regex()
        .captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| {
            m.as_str()
                .split(',')
                .map(|kw| kw.trim().trim_matches(|c: char| c == '*' || c == '.').to_lowercase())
                .filter(|kw| !kw.is_empty() && kw != "none")
                .take(MAX_MISSING_KEYWORDS)
                .collect()
        })
        .unwrap_or_default();

    let notes = generate_notes(fit_score, &missing_keywords).to_string();

    Ok(FitScoreResult {
        fit_score,
        missing_keywords,
        notes,
    })
}
