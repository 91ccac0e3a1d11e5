use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// JSON body extractor whose rejections surface as `Validation` errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor; an id segment that does not parse is a `NotFound`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string extractor whose rejections surface as `Validation` errors
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Longest text accepted for any stored string column.
pub const MAX_TEXT_LEN: usize = 255;

/// Body of director and genre create/update requests
#[derive(Debug, Deserialize)]
pub struct NameRequest {
    /// Ids are server-generated; a client value is read only to be ignored
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub name: Option<String>,
}

impl NameRequest {
    pub fn into_name(self, entity: &str) -> Result<String> {
        if self.id.is_some() {
            tracing::debug!(entity, "Ignoring client-supplied id");
        }
        require_text(self.name, "name")
    }
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i32,
}

/// Require a present, non-blank string field. The value is kept as sent.
pub fn require_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => {
            check_length(Some(text.as_str()), field)?;
            Ok(text)
        }
        Some(_) => Err(AppError::Validation(format!("Field '{}' must not be blank", field))),
        None => Err(AppError::Validation(format!("Field '{}' is required", field))),
    }
}

/// Reject text that would not fit its column. Length is counted in characters.
pub fn check_length(value: Option<&str>, field: &str) -> Result<()> {
    match value {
        Some(text) if text.chars().count() > MAX_TEXT_LEN => Err(AppError::Validation(format!(
            "Field '{}' must be at most {} characters",
            field, MAX_TEXT_LEN
        ))),
        _ => Ok(()),
    }
}
