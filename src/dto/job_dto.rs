use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::CandidateStatus;
use crate::models::job::{Job, JobStatus, Requirements};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub requirements: Requirements,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub requirements: Option<Requirements>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStats {
    pub job_id: String,
    pub total_candidates: i64,
    pub avg_score: f64,
    pub max_score: f64,
    pub min_score: f64,
    pub candidates_by_status: HashMap<CandidateStatus, i64>,
}

impl From<CreateJobPayload> for Job {
    fn from(value: CreateJobPayload) -> Self {
        Job::new(value.title, value.description, value.requirements)
    }
}
