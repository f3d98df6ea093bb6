//! Request Validation Module
//!
//! Field validation and input sanitization for visitor-submitted forms.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Validation error types
#[derive(Debug, Error, Clone, Serialize, Deserialize, PartialEq)]
pub enum ValidationError {
    #[error("Required field '{field}' is missing")]
    MissingField { field: String },

    #[error("Field '{field}' is too long (max: {max}, got: {got})")]
    TooLong {
        field: String,
        max: usize,
        got: usize,
    },

    #[error("Field '{field}' is not a valid email: {value}")]
    InvalidEmail { field: String, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } => field.as_str(),
            Self::TooLong { field, .. } => field.as_str(),
            Self::InvalidEmail { field, .. } => field.as_str(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Validation result type
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Request validation trait
pub trait Validatable {
    /// Validate the request data
    fn validate(&self) -> ValidationResult<()>;
}

/// Require a non-blank value no longer than `max` characters
pub fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
        });
    }

    let length = value.chars().count();
    if length > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            got: length,
        });
    }

    Ok(())
}

/// Validate email format
pub fn validate_email(field: &str, value: &str) -> ValidationResult<()> {
    if EMAIL_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Sanitize string input
pub fn sanitize_string(input: &str) -> String {
    // Remove null bytes and control characters
    input
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_control() || c.is_whitespace())
        .collect()
}
