//! Local input validation, applied before any network call.

use thiserror::Error;

/// Input rejected locally; no network call was issued.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your password")]
    EmptyPassword,
    #[error("The code must contain exactly 6 digits")]
    InvalidOneTimeCode,
}

/// Syntactic email check: one `@`, a non-empty local part, and a domain
/// containing an interior dot. Deliverability is the server's concern.
pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    let valid = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

/// The one-time code must be exactly 6 ASCII digits.
pub(crate) fn validate_one_time_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidOneTimeCode)
    }
}
