use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Machine-readable error classification sent alongside every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Conflict,
    ReferenceNotFound,
    EmptyResult,
    Validation,
    Database,
}

pub const PATH_NOT_FOUND: &str = "Resource with the requested id not found";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    ReferenceNotFound(String),

    #[error("{0}")]
    EmptyResult(String),

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Database(_) => ErrorKind::Database,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::ReferenceNotFound(_) => ErrorKind::ReferenceNotFound,
            Self::EmptyResult(_) => ErrorKind::EmptyResult,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound | ErrorKind::ReferenceNotFound | ErrorKind::EmptyResult => {
                StatusCode::NOT_FOUND
            }
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Database => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// A path segment that is not a valid id addresses no resource.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected path parameter");
        Self::NotFound(PATH_NOT_FOUND.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = self.status();

        let message = match self {
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                "Database error occurred".to_string()
            }
            Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::ReferenceNotFound(msg)
            | Self::EmptyResult(msg)
            | Self::Validation(msg) => msg,
        };

        let body = Json(json!({
            "kind": kind,
            "error": message,
        }));

        let mut response = (status, body).into_response();
        // Read back by the legacy status middleware
        response.extensions_mut().insert(kind);
        response
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
