use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::event::FieldError;
use crate::services::validator::ValidationError;
use crate::store::StoreError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Rejected(#[from] ValidationError),

    #[error("Store error")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected(ValidationError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Rejected(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "VALIDATION_ERROR",
            AppError::Rejected(ValidationError::InvalidRange) => "INVALID_RANGE",
            AppError::Rejected(ValidationError::NotFound(_)) => "NOT_FOUND",
            AppError::Rejected(ValidationError::Overlap { .. }) => "OVERLAP",
            AppError::Store(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::InvalidInput(msg) => {
                warn!(code = self.code(), message = %msg, "Request rejected");
            }
            AppError::Rejected(reason) => {
                warn!(code = self.code(), reason = %reason, "Event rejected");
            }
            AppError::Store(e) => {
                error!(error = ?e, "Store error");
            }
        }
    }
}

impl From<FieldError> for AppError {
    fn from(e: FieldError) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        // Store failures stay server-side
        let public_message = match &self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Rejected(reason) => reason.to_string(),
            AppError::Store(_) => "A database error occurred".to_string(),
        };

        let details = match &self {
            AppError::Rejected(ValidationError::Overlap { conflicting_id }) => {
                Some(serde_json::json!({ "conflicting_id": conflicting_id }))
            }
            _ => None,
        };

        error_response(code, public_message, details, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kinds_map_to_status_codes() {
        let cases = [
            (ValidationError::InvalidRange, StatusCode::BAD_REQUEST, "INVALID_RANGE"),
            (ValidationError::NotFound(3), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (
                ValidationError::Overlap { conflicting_id: 1 },
                StatusCode::BAD_REQUEST,
                "OVERLAP",
            ),
        ];
        for (kind, status, code) in cases {
            let err = AppError::from(kind);
            assert_eq!(err.status_code(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_field_errors_are_bad_requests() {
        let err = AppError::from(FieldError::EmptyName);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_store_errors_hide_details() {
        let err = AppError::from(StoreError::Database(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
