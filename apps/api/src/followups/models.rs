use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline status of a job application. Owned by the job store; only
/// `Applied` and `Interview` schedule reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Saved,
    Applied,
    Interview,
    Offer,
    Rejected,
}

/// Reminder kind. Encodes both the triggering status and the offset from the
/// applied date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowUpType {
    #[serde(rename = "applied-3d")]
    Applied3d,
    #[serde(rename = "applied-7d")]
    Applied7d,
    #[serde(rename = "interview-2d")]
    Interview2d,
    #[serde(rename = "interview-5d")]
    Interview5d,
}

impl FollowUpType {
    pub const ALL: [FollowUpType; 4] = [
        FollowUpType::Applied3d,
        FollowUpType::Applied7d,
        FollowUpType::Interview2d,
        FollowUpType::Interview5d,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FollowUpType::Applied3d => "applied-3d",
            FollowUpType::Applied7d => "applied-7d",
            FollowUpType::Interview2d => "interview-2d",
            FollowUpType::Interview5d => "interview-5d",
        }
    }

    /// Distance from the applied date to the due date.
    pub fn offset(self) -> Duration {
        match self {
            FollowUpType::Applied3d => Duration::days(3),
            FollowUpType::Applied7d => Duration::days(7),
            FollowUpType::Interview2d => Duration::days(2),
            FollowUpType::Interview5d => Duration::days(5),
        }
    }

    /// Reminder kinds scheduled when a job enters `status`.
    pub fn for_status(status: JobStatus) -> &'static [FollowUpType] {
        match status {
            JobStatus::Applied => &[FollowUpType::Applied3d, FollowUpType::Applied7d],
            JobStatus::Interview => &[FollowUpType::Interview2d, FollowUpType::Interview5d],
            JobStatus::Saved | JobStatus::Offer | JobStatus::Rejected => &[],
        }
    }
}

impl fmt::Display for FollowUpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFollowUpType(pub String);

impl fmt::Display for UnknownFollowUpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown follow-up type '{}'", self.0)
    }
}

impl std::error::Error for UnknownFollowUpType {}

impl FromStr for FollowUpType {
    type Err = UnknownFollowUpType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FollowUpType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownFollowUpType(s.to_string()))
    }
}

/// One pending reminder for a job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub job_id: String,
    pub due_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub follow_up_type: FollowUpType,
    #[serde(default)]
    pub done: bool,
}

impl FollowUp {
    pub fn matches(&self, job_id: &str, follow_up_type: FollowUpType) -> bool {
        self.job_id == job_id && self.follow_up_type == follow_up_type
    }
}

/// Subject and body of a follow-up message. Bodies carry literal
/// placeholders (`[Name]`, `[Job Title]`, ...) for the caller to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowUpTemplate {
    pub subject: &'static str,
    pub body: &'static str,
}
