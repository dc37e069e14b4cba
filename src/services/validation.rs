//! Field rules for user records.
//!
//! The same checks guard create and update. They run in a fixed order and the
//! first failure is reported; errors are never aggregated.

use crate::models::user::UserPayload;

pub const MAX_NAME_CHARS: usize = 100;
pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 100;

/// A user payload violated one of the field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("name too long")]
    NameTooLong,

    #[error("age out of range")]
    AgeOutOfRange,
}

/// Check a payload against the field rules.
///
/// # Rules
///
/// 1. `name` must be present and contain something other than whitespace
/// 2. `name` must be at most 100 characters
/// 3. `age`, when present, must be between 0 and 100 inclusive
pub fn validate_user(payload: &UserPayload) -> Result<(), ValidationError> {
    let name = payload.name.as_deref().unwrap_or_default();

    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }

    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::NameTooLong);
    }

    if let Some(age) = payload.age {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::AgeOutOfRange);
        }
    }

    Ok(())
}
