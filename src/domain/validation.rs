//! Validation rules shared by request payloads.

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::config::is_valid_gender;

/// A request payload that knows how its validation errors are reported.
pub trait ValidatedPayload: Validate {
    /// Object name used for object-level violations and message keys
    const OBJECT_NAME: &'static str;

    /// Fields in declaration order; violations are reported in this order
    const FIELDS: &'static [&'static str];
}

/// Rejects empty and whitespace-only text
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

pub fn valid_gender(value: &str) -> Result<(), ValidationError> {
    if is_valid_gender(value) {
        Ok(())
    } else {
        Err(ValidationError::new("gender"))
    }
}

/// Launch dates may not lie in the future
pub fn not_in_future(value: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *value > Utc::now() {
        return Err(ValidationError::new("launch_date"));
    }
    Ok(())
}
