//! Axum route handlers for the Fit Score API.

use axum::{extract::State, Json};
use tracing::debug;

use crate::scoring::fit_scoring::{
    analyze_job_fit, score_with_fallback, FitScoreRequest, FitScoreResult,
};
use crate::state::AppState;

/// POST /api/v1/fit-score
///
/// Deterministic keyword-overlap score. No outbound calls. A description with
/// no usable keywords scores 0 rather than being rejected.
pub async fn handle_fit_score(Json(request): Json<FitScoreRequest>) -> Json<FitScoreResult> {
    Json(analyze_job_fit(&request))
}

/// POST /api/v1/fit-score/ai
///
/// LLM-assisted score when a key is configured; any failure on that path
/// degrades to the keyword score, so a well-formed body always gets a score.
pub async fn handle_fit_score_ai(
    State(state): State<AppState>,
    Json(request): Json<FitScoreRequest>,
) -> Json<FitScoreResult> {
    let result = match state.llm_fit_scorer.as_deref() {
        Some(scorer) => score_with_fallback(scorer, &request).await,
        None => {
            debug!("No LLM configured, using keyword fit score");
            analyze_job_fit(&request)
        }
    };

    Json(result)
}
