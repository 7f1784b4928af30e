//! Shared data-shape contract of the recruitment platform: the records the
//! frontend and backend exchange, plus the trust-boundary validation that
//! admits them.

pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod utils;
pub mod validation;

pub use error::{Error, Result, ValidationError};
pub use models::auth::{AuthResponse, TokenType};
pub use models::candidate::{Candidate, CandidateStatus};
pub use models::job::{Job, JobStatus, Requirements};
pub use models::user::{User, UserRole};
pub use validation::{
    validate_auth_response, validate_candidate, validate_candidate_with, validate_job,
    validate_user,
};
