use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub score: i64,
    pub status: CandidateStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Reviewing,
    Accepted,
    Rejected,
}

impl Candidate {
    pub fn new(job_id: String, name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            job_id,
            name,
            email,
            score: 0,
            status: CandidateStatus::New,
            created_at: crate::utils::time::now(),
        }
    }
}

impl CandidateStatus {
    pub const VALUES: &'static [&'static str] = &["new", "reviewing", "accepted", "rejected"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(CandidateStatus::New),
            "reviewing" => Some(CandidateStatus::Reviewing),
            "accepted" => Some(CandidateStatus::Accepted),
            "rejected" => Some(CandidateStatus::Rejected),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::New => "new",
            CandidateStatus::Reviewing => "reviewing",
            CandidateStatus::Accepted => "accepted",
            CandidateStatus::Rejected => "rejected",
        }
    }

    /// `accepted` and `rejected` admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CandidateStatus::Accepted | CandidateStatus::Rejected)
    }

    /// Transition graph: `new` may move to any other status, `reviewing`
    /// only to a terminal one.
    pub fn can_transition_to(&self, next: CandidateStatus) -> bool {
        match self {
            CandidateStatus::New => next != CandidateStatus::New,
            CandidateStatus::Reviewing => next.is_terminal(),
            CandidateStatus::Accepted | CandidateStatus::Rejected => false,
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
