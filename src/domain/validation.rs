#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("{0:?} is not a recognised vessel type")]
    UnknownVesselType(String),
}

/// Fail with every required field that is empty, in the order given.
pub fn require_fields(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
