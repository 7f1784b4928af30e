use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::config::{score_bounds, ScoreBounds};
use crate::error::ValidationError;
use crate::models::auth::{AuthResponse, TokenType};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::job::{Job, JobStatus, Requirements};
use crate::models::user::{User, UserRole};

/// Checks an inbound job record field by field and returns the typed form.
pub fn validate_job(input: &Value) -> Result<Job, ValidationError> {
    job_from_value(input).map_err(reject("job"))
}

/// Candidate variant of [`validate_job`]; score bounds come from
/// [`score_bounds`].
pub fn validate_candidate(input: &Value) -> Result<Candidate, ValidationError> {
    validate_candidate_with(score_bounds(), input)
}

pub fn validate_candidate_with(
    bounds: ScoreBounds,
    input: &Value,
) -> Result<Candidate, ValidationError> {
    candidate_from_value(input, bounds).map_err(reject("candidate"))
}

pub fn validate_user(input: &Value) -> Result<User, ValidationError> {
    user_from_value(input).map_err(reject("user"))
}

pub fn validate_auth_response(input: &Value) -> Result<AuthResponse, ValidationError> {
    auth_response_from_value(input).map_err(reject("auth response"))
}

fn job_from_value(input: &Value) -> Result<Job, ValidationError> {
    let obj = as_object(input)?;
    Ok(Job {
        id: non_empty_text(obj, "id")?,
        title: non_empty_text(obj, "title")?,
        description: text(obj, "description")?,
        requirements: requirements_from_value(obj)?,
        status: enum_value(obj, "status", JobStatus::parse, JobStatus::VALUES)?,
        created_at: timestamp(obj, "created_at")?,
    })
}

fn requirements_from_value(obj: &Map<String, Value>) -> Result<Requirements, ValidationError> {
    let nested = required(obj, "requirements")?
        .as_object()
        .ok_or_else(|| invalid_format("requirements", "expected an object"))?;
    Ok(Requirements {
        must_have: string_items(nested, "must_have", "requirements.must_have")?,
        nice_to_have: string_items(nested, "nice_to_have", "requirements.nice_to_have")?,
    })
}

fn candidate_from_value(input: &Value, bounds: ScoreBounds) -> Result<Candidate, ValidationError> {
    let obj = as_object(input)?;
    let score = integer(obj, "score")?;
    if !bounds.contains(score) {
        return Err(ValidationError::OutOfRange {
            field: "score".to_string(),
            value: score,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(Candidate {
        id: non_empty_text(obj, "id")?,
        job_id: non_empty_text(obj, "job_id")?,
        name: non_empty_text(obj, "name")?,
        email: email(obj, "email")?,
        score,
        status: enum_value(obj, "status", CandidateStatus::parse, CandidateStatus::VALUES)?,
        created_at: timestamp(obj, "created_at")?,
    })
}

fn user_from_value(input: &Value) -> Result<User, ValidationError> {
    let obj = as_object(input)?;
    Ok(User {
        id: non_empty_text(obj, "id")?,
        email: email(obj, "email")?,
        company_id: non_empty_text(obj, "company_id")?,
        role: enum_value(obj, "role", UserRole::parse, UserRole::VALUES)?,
    })
}

fn auth_response_from_value(input: &Value) -> Result<AuthResponse, ValidationError> {
    let obj = as_object(input)?;
    let access_token = text(obj, "access_token")?;
    // An empty credential is treated as absent, not merely malformed.
    if access_token.is_empty() {
        return Err(ValidationError::MissingField {
            field: "access_token".to_string(),
        });
    }
    let token_type = enum_value(obj, "token_type", TokenType::parse, TokenType::VALUES)?;
    Ok(AuthResponse {
        access_token,
        token_type,
    })
}

fn reject(record: &'static str) -> impl Fn(ValidationError) -> ValidationError {
    move |err| {
        tracing::warn!("rejected {} payload: {}", record, err);
        err
    }
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input
        .as_object()
        .ok_or_else(|| invalid_format("payload", "expected a JSON object"))
}

fn required<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField {
            field: field.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

fn text(obj: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    required(obj, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| invalid_format(field, "expected a string"))
}

fn non_empty_text(obj: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    let value = text(obj, field)?;
    if value.trim().is_empty() {
        return Err(invalid_format(field, "must not be empty"));
    }
    Ok(value)
}

fn string_items(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Vec<String>, ValidationError> {
    let raw = match map.get(key) {
        None | Some(Value::Null) => {
            return Err(ValidationError::MissingField {
                field: path.to_string(),
            })
        }
        Some(value) => value,
    };
    let items = raw
        .as_array()
        .ok_or_else(|| invalid_format(path, "expected an array of strings"))?;
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str()
                .map(str::to_owned)
                .ok_or_else(|| invalid_format(&format!("{}[{}]", path, idx), "expected a string"))
        })
        .collect()
}

fn integer(obj: &Map<String, Value>, field: &str) -> Result<i64, ValidationError> {
    required(obj, field)?
        .as_i64()
        .ok_or_else(|| invalid_format(field, "expected an integer"))
}

fn email(obj: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    let value = non_empty_text(obj, field)?;
    if !value.validate_email() {
        return Err(invalid_format(field, "not a valid email address"));
    }
    Ok(value)
}

fn timestamp(obj: &Map<String, Value>, field: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = text(obj, field)?;
    crate::utils::time::parse_rfc3339(&raw)
        .map_err(|e| invalid_format(field, &format!("not an RFC 3339 timestamp: {}", e)))
}

fn enum_value<T>(
    obj: &Map<String, Value>,
    field: &str,
    parse: fn(&str) -> Option<T>,
    allowed: &'static [&'static str],
) -> Result<T, ValidationError> {
    let raw = text(obj, field)?;
    parse(&raw).ok_or_else(|| ValidationError::InvalidEnum {
        field: field.to_string(),
        value: raw,
        allowed,
    })
}

fn invalid_format(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
