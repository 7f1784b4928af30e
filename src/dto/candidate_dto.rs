use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::CandidateStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCandidatePayload {
    pub status: Option<CandidateStatus>,
    #[validate(length(min = 1))]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateNote {
    #[validate(length(min = 1))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(default)]
pub struct CandidateListQuery {
    pub status: Option<CandidateStatus>,
    #[validate(range(min = 0, max = 100))]
    pub min_score: Option<i64>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
