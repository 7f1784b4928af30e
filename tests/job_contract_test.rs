use serde_json::{json, Value as JsonValue};

use recruitment_contracts::dto::job_dto::{CreateJobPayload, JobStats, UpdateJobPayload};
use recruitment_contracts::dto::validate_payload;
use recruitment_contracts::models::job::Requirements;
use recruitment_contracts::{validate_job, CandidateStatus, Job, JobStatus, ValidationError};

fn engineer_job() -> JsonValue {
    json!({
        "id": "j1",
        "title": "Engineer",
        "description": "Backend engineer for the hiring pipeline",
        "requirements": {
            "must_have": ["Go"],
            "nice_to_have": []
        },
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z"
    })
}

#[test]
fn valid_job_round_trips_unchanged() {
    let input = engineer_job();
    let job = validate_job(&input).expect("job should validate");
    assert_eq!(job.id, "j1");
    assert_eq!(job.status, JobStatus::Active);
    assert_eq!(job.requirements.must_have, vec!["Go".to_string()]);
    assert!(job.requirements.nice_to_have.is_empty());

    let serialized = serde_json::to_value(&job).expect("serialize job");
    assert_eq!(serialized, input);

    let restored: Job = serde_json::from_value(serialized).expect("deserialize job");
    assert_eq!(restored, job);
}

#[test]
fn absent_required_fields_are_reported_by_path() {
    let mut input = engineer_job();
    input.as_object_mut().unwrap().remove("title");
    assert_eq!(
        validate_job(&input),
        Err(ValidationError::MissingField {
            field: "title".to_string()
        })
    );

    let mut input = engineer_job();
    input["requirements"].as_object_mut().unwrap().remove("nice_to_have");
    assert_eq!(
        validate_job(&input),
        Err(ValidationError::MissingField {
            field: "requirements.nice_to_have".to_string()
        })
    );
}

#[test]
fn null_counts_as_missing() {
    let mut input = engineer_job();
    input["description"] = JsonValue::Null;
    assert_eq!(
        validate_job(&input),
        Err(ValidationError::MissingField {
            field: "description".to_string()
        })
    );
}

#[test]
fn unknown_status_is_an_enum_error() {
    let mut input = engineer_job();
    input["status"] = json!("archived");
    assert_eq!(
        validate_job(&input),
        Err(ValidationError::InvalidEnum {
            field: "status".to_string(),
            value: "archived".to_string(),
            allowed: JobStatus::VALUES,
        })
    );
}

#[test]
fn malformed_timestamp_is_rejected() {
    let mut input = engineer_job();
    input["created_at"] = json!("yesterday");
    assert!(matches!(
        validate_job(&input),
        Err(ValidationError::InvalidFormat { field, .. }) if field == "created_at"
    ));
}

#[test]
fn non_string_requirement_items_are_rejected() {
    let mut input = engineer_job();
    input["requirements"]["must_have"] = json!(["Go", 7]);
    assert!(matches!(
        validate_job(&input),
        Err(ValidationError::InvalidFormat { field, .. }) if field == "requirements.must_have[1]"
    ));
}

#[test]
fn job_status_only_moves_forward() {
    assert!(JobStatus::Active.can_transition_to(JobStatus::Closed));
    assert!(!JobStatus::Closed.can_transition_to(JobStatus::Active));
    assert!(!JobStatus::Active.can_transition_to(JobStatus::Active));
    assert!(!JobStatus::Closed.can_transition_to(JobStatus::Closed));
}

#[test]
fn create_payload_builds_a_fresh_active_job() {
    let payload = CreateJobPayload {
        title: "Engineer".to_string(),
        description: "Backend engineer".to_string(),
        requirements: Requirements {
            must_have: vec!["Go".to_string()],
            nice_to_have: vec![],
        },
    };
    validate_payload(&payload).expect("payload should pass");

    let job = Job::from(payload);
    assert_eq!(job.status, JobStatus::Active);
    assert!(uuid::Uuid::parse_str(&job.id).is_ok());
}

#[test]
fn update_payload_rejects_blank_title() {
    let payload = UpdateJobPayload {
        title: Some(String::new()),
        description: None,
        requirements: None,
        status: Some(JobStatus::Closed),
    };
    assert!(validate_payload(&payload).is_err());
}

#[test]
fn job_stats_serialize_status_counts_by_wire_name() {
    let stats = JobStats {
        job_id: "j1".to_string(),
        total_candidates: 3,
        avg_score: 71.5,
        max_score: 92.0,
        min_score: 40.0,
        candidates_by_status: [(CandidateStatus::New, 2), (CandidateStatus::Accepted, 1)]
            .into_iter()
            .collect(),
    };
    let value = serde_json::to_value(&stats).expect("serialize stats");
    assert_eq!(value["candidates_by_status"]["new"], json!(2));
    assert_eq!(value["candidates_by_status"]["accepted"], json!(1));
}
