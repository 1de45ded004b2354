//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("unsupported JWT algorithm '{0}' (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),
    #[error("config load: {0}")]
    Load(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("foreign key: {0}")]
    ForeignKey(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("internal: {0}")]
    Internal(String),
}

/// SQLSTATE codes for the constraint violations the schema can raise.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let Some(db) = e.as_database_error() else {
            return AppError::Db(e);
        };
        let code = db.code().map(|c| c.into_owned());
        let constraint = db.constraint().unwrap_or_default().to_string();
        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => AppError::Conflict(unique_message(&constraint)),
            Some(FOREIGN_KEY_VIOLATION) => AppError::ForeignKey(foreign_key_message(&constraint)),
            Some(CHECK_VIOLATION) => AppError::Validation(check_message(&constraint)),
            _ => AppError::Db(e),
        }
    }
}

fn unique_message(constraint: &str) -> String {
    match constraint {
        "uq_users_username" => "username already exists".into(),
        "uq_users_email" => "email already exists".into(),
        "uq_cryptids_name" => "cryptid name already exists".into(),
        other => format!("duplicate value violates {}", other),
    }
}

fn foreign_key_message(constraint: &str) -> String {
    match constraint {
        "fk_cryptids_created_by" => "created_by does not reference an existing user".into(),
        "fk_sightings_cryptid" => "cryptid_id does not reference an existing cryptid".into(),
        "fk_sightings_chaser" => "chaser_id does not reference an existing user".into(),
        other => format!("missing referenced row for {}", other),
    }
}

fn check_message(constraint: &str) -> String {
    match constraint {
        "ck_sightings_confidence" => "confidence must be between 1 and 5".into(),
        other => format!("value violates {}", other),
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::ForeignKey(_) => (StatusCode::UNPROCESSABLE_ENTITY, "foreign_key_violation"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT, "conflict"),
            (AppError::ForeignKey("x".into()), StatusCode::UNPROCESSABLE_ENTITY, "foreign_key_violation"),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND, "not_found"),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST, "bad_request"),
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED, "unauthorized"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_and_code(), (status, code));
        }
    }

    #[test]
    fn internal_and_oversized_errors() {
        assert_eq!(
            AppError::Internal("x".into()).status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        );
        assert_eq!(
            AppError::PayloadTooLarge("x".into()).status_and_code(),
            (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
        );
    }

    #[test]
    fn row_not_found_is_404_and_pool_errors_are_500() {
        let (status, _) = AppError::from(sqlx::Error::RowNotFound).status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, code) = AppError::from(sqlx::Error::PoolTimedOut).status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "database_error");
    }

    #[test]
    fn constraint_names_get_field_messages() {
        assert_eq!(unique_message("uq_users_email"), "email already exists");
        assert_eq!(
            foreign_key_message("fk_sightings_cryptid"),
            "cryptid_id does not reference an existing cryptid"
        );
        assert_eq!(check_message("ck_sightings_confidence"), "confidence must be between 1 and 5");
        assert!(unique_message("uq_other").contains("uq_other"));
    }

    #[tokio::test]
    async fn error_body_has_code_and_message() {
        let resp = AppError::NotFound("sighting 42".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "error": { "code": "not_found", "message": "not found: sighting 42" } })
        );
    }
}
