//! Axum route handlers for the Follow-Up API.
//!
//! The client owns the working set: every request carries the reminders it
//! wants transformed and gets a new collection back.

use axum::{extract::Path, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::followups::models::{FollowUp, FollowUpTemplate, FollowUpType, JobStatus};
use crate::followups::scheduler::{
    format_follow_up_date, generate_follow_ups, get_upcoming_follow_ups, mark_follow_up_done,
    parse_applied_date, snooze_follow_up, ScheduleError,
};
use crate::followups::templates::get_follow_up_template;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFollowUpsRequest {
    pub job_id: String,
    pub status: JobStatus,
    pub applied_date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingSetRequest {
    pub follow_ups: Vec<FollowUp>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpActionRequest {
    pub follow_ups: Vec<FollowUp>,
    pub job_id: String,
    #[serde(rename = "type")]
    pub follow_up_type: FollowUpType,
}

/// An upcoming reminder with its display label ("Today", "In 3 days", ...).
#[derive(Debug, Serialize)]
pub struct UpcomingFollowUp {
    #[serde(flatten)]
    pub follow_up: FollowUp,
    pub label: String,
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError::Validation(err.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/follow-ups/generate
pub async fn handle_generate(
    Json(req): Json<GenerateFollowUpsRequest>,
) -> Result<Json<Vec<FollowUp>>, AppError> {
    if req.job_id.trim().is_empty() {
        return Err(AppError::Validation("jobId cannot be empty".to_string()));
    }
    let applied_date = parse_applied_date(&req.applied_date)?;
    let follow_ups = generate_follow_ups(&req.job_id, req.status, applied_date)?;
    debug!(
        "Generated {} follow-ups for job {} ({:?})",
        follow_ups.len(),
        req.job_id,
        req.status
    );
    Ok(Json(follow_ups))
}

/// POST /api/v1/follow-ups/upcoming
pub async fn handle_upcoming(Json(req): Json<WorkingSetRequest>) -> Json<Vec<UpcomingFollowUp>> {
    let now = Utc::now();
    let upcoming = get_upcoming_follow_ups(&req.follow_ups, now)
        .into_iter()
        .map(|follow_up| UpcomingFollowUp {
            label: format_follow_up_date(follow_up.due_at, now),
            follow_up,
        })
        .collect();
    Json(upcoming)
}

/// POST /api/v1/follow-ups/done
pub async fn handle_mark_done(Json(req): Json<FollowUpActionRequest>) -> Json<Vec<FollowUp>> {
    Json(mark_follow_up_done(
        &req.follow_ups,
        &req.job_id,
        req.follow_up_type,
    ))
}

/// POST /api/v1/follow-ups/snooze
pub async fn handle_snooze(
    Json(req): Json<FollowUpActionRequest>,
) -> Result<Json<Vec<FollowUp>>, AppError> {
    let snoozed = snooze_follow_up(&req.follow_ups, &req.job_id, req.follow_up_type)?;
    Ok(Json(snoozed))
}

/// GET /api/v1/follow-ups/templates/:type
pub async fn handle_get_template(
    Path(raw_type): Path<String>,
) -> Result<Json<FollowUpTemplate>, AppError> {
    let follow_up_type = raw_type
        .parse::<FollowUpType>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    Ok(Json(get_follow_up_template(follow_up_type)))
}
