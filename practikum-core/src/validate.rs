//! Input validation shared by all entities
//!
//! Validation runs before any storage access. Bounds are counted in
//! characters, and values are never truncated to fit.

use crate::error::{PractikumError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Longest accepted email address
const MAX_EMAIL_LEN: usize = 254;

/// Longest accepted local part (before the `@`)
const MAX_LOCAL_PART_LEN: usize = 64;

/// Implemented by every input payload
pub trait Validate {
    /// Check all fields, reporting the first violation
    fn validate(&self) -> Result<()>;
}

/// Require `1..=max` characters in a text field
pub fn text(field: &str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(PractikumError::invalid(format!(
            "{} must not be empty",
            field
        )));
    }
    let len = value.chars().count();
    if len > max {
        return Err(PractikumError::invalid(format!(
            "{} must be at most {} characters (got {})",
            field, max, len
        )));
    }
    Ok(())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // Dot-atom local part, LDH labels with at least one dot in the domain
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .expect("email pattern is valid")
    })
}

/// Whether `value` is a well-formed `local-part@domain` address
pub fn is_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LEN {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LEN => email_regex().is_match(value),
        _ => false,
    }
}

/// Require a well-formed email address
pub fn email(field: &str, value: &str) -> Result<()> {
    if is_email(value) {
        Ok(())
    } else {
        Err(PractikumError::invalid(format!(
            "{} is not a valid email address",
            field
        )))
    }
}
