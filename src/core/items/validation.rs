//! Item payload validation

use super::types::ItemPayload;
use crate::utils::error::{Result, ServiceError};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

/// Check an item payload, returning the first violated rule
pub fn validate_payload(payload: &ItemPayload) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(ServiceError::validation("Name is required"));
    }

    if payload.email.trim().is_empty() {
        return Err(ServiceError::validation("Email is required"));
    }

    if !is_valid_email(&payload.email) {
        return Err(ServiceError::validation("Email should be valid"));
    }

    Ok(())
}

/// Whether `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
