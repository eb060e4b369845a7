//! Explicit request validation: every function returns either a parsed value
//! or a structured error naming the failing field(s).

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::types::{CreateFortuneRequest, SaveFortuneRequest};
use crate::models::Category;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Error)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let described: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&described.join("; "))
    }
}

impl ValidationError {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field,
                message: message.into(),
            }],
        }
    }
}

/// Parses a path or body id. Ids are positive integers assigned by the
/// stores.
pub fn parse_id(raw: &str, field: &'static str) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::single(
            field,
            format!("'{raw}' is not a valid id; expected a positive integer"),
        )),
    }
}

pub fn parse_category(raw: &str) -> Result<Category, ValidationError> {
    Category::parse(raw).ok_or_else(|| {
        ValidationError::single(
            "category",
            format!("unknown category '{raw}'; expected one of love, career, wealth, general"),
        )
    })
}

/// Validates a create-fortune payload, collecting every failing field.
pub fn parse_new_fortune(
    payload: &CreateFortuneRequest,
    max_message_length: usize,
) -> Result<(String, Category), ValidationError> {
    let mut errors = Vec::new();

    let message = match payload.message.as_deref().map(str::trim) {
        None => {
            errors.push(FieldError {
                field: "message",
                message: "message is required".to_string(),
            });
            None
        }
        Some("") => {
            errors.push(FieldError {
                field: "message",
                message: "message cannot be empty".to_string(),
            });
            None
        }
        Some(message) if message.chars().count() > max_message_length => {
            errors.push(FieldError {
                field: "message",
                message: format!("message cannot exceed {max_message_length} characters"),
            });
            None
        }
        Some(message) => Some(message),
    };

    let category = match payload.category.as_deref() {
        None => {
            errors.push(FieldError {
                field: "category",
                message: "category is required".to_string(),
            });
            None
        }
        Some(raw) => match parse_category(raw) {
            Ok(category) => Some(category),
            Err(err) => {
                errors.extend(err.errors);
                None
            }
        },
    };

    match (message, category) {
        (Some(message), Some(category)) if errors.is_empty() => {
            Ok((message.to_string(), category))
        }
        _ => Err(ValidationError { errors }),
    }
}

/// Validates a save payload, yielding the referenced fortune id.
pub fn parse_fortune_ref(payload: &SaveFortuneRequest) -> Result<i64, ValidationError> {
    match payload.fortune_id {
        Some(id) if id > 0 => Ok(id),
        Some(id) => Err(ValidationError::single(
            "fortuneId",
            format!("'{id}' is not a valid fortune id; expected a positive integer"),
        )),
        None => Err(ValidationError::single(
            "fortuneId",
            "fortuneId is required".to_string(),
        )),
    }
}
