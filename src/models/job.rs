use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub requirements: Requirements,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Closed,
}

impl Job {
    pub fn new(title: String, description: String, requirements: Requirements) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            requirements,
            status: JobStatus::Active,
            created_at: crate::utils::time::now(),
        }
    }
}

impl JobStatus {
    pub const VALUES: &'static [&'static str] = &["active", "closed"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(JobStatus::Active),
            "closed" => Some(JobStatus::Closed),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
        }
    }

    /// The only legal transition is `active -> closed`.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        matches!((self, next), (JobStatus::Active, JobStatus::Closed))
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
