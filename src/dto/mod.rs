pub mod candidate_dto;
pub mod job_dto;
pub mod user_dto;

use validator::Validate;

use crate::error::Result;

/// Runs a payload's declared rules, surfacing failures as
/// [`crate::Error::Payload`].
pub fn validate_payload<T: Validate>(payload: &T) -> Result<()> {
    payload.validate()?;
    Ok(())
}
