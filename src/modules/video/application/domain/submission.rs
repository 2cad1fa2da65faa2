use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoStatus {
    Pending,
    Verified,
    Rejected,
}

impl VideoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::Pending => "PENDING",
            VideoStatus::Verified => "VERIFIED",
            VideoStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(VideoStatus::Pending),
            "VERIFIED" => Ok(VideoStatus::Verified),
            "REJECTED" => Ok(VideoStatus::Rejected),
            other => Err(format!("Unknown video status: {}", other)),
        }
    }
}

/// Photo and video captured for the liveness step. URLs are opaque blob references.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSubmission {
    #[serde(skip)]
    pub user_id: Uuid,
    pub photo_url: String,
    pub video_url: String,
    pub status: VideoStatus,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVideoSubmission {
    pub user_id: Uuid,
    pub photo_url: String,
    pub video_url: String,
    pub status: VideoStatus,
}
