//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Each variant
//! classifies into exactly one [`ErrorKind`]; the problem layer turns that
//! kind into the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::config::{MSG_ENTITY_IN_USE, MSG_NO_RECORDS_FOUND, MSG_REQUIRED_OBJECT_IS_NULL};
use crate::problem::{ErrorKind, ValidationReport};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Domain errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    EntityInUse(String),

    #[error("{0}")]
    Business(String),

    #[error("It is not allowed to persist a null object!")]
    RequiredObjectIsNull,

    #[error("{0}")]
    AccessDenied(String),

    // Request errors
    #[error("Validation failed for {}", .0.object_name)]
    Validation(ValidationReport),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    #[error("Property '{path}' received '{value}', expected {expected}")]
    InvalidBodyValue {
        path: String,
        value: String,
        expected: String,
    },

    #[error("Parameter '{name}' received '{value}', expected {expected}")]
    InvalidParam {
        name: String,
        value: String,
        expected: String,
    },

    #[error("No route for {0}")]
    RouteNotFound(String),

    /// Refused by the framework before a handler ran (oversized body and the like)
    #[error("Request rejected with {status}: {cause}")]
    Rejected { status: StatusCode, cause: String },

    // External service errors
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classify this error for the problem translator
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(msg) => ErrorKind::EntityNotFound(msg.clone()),
            AppError::EntityInUse(msg) => ErrorKind::EntityInUse(msg.clone()),
            AppError::Business(msg) => ErrorKind::BusinessRuleViolated(msg.clone()),
            AppError::RequiredObjectIsNull => {
                ErrorKind::BusinessRuleViolated(MSG_REQUIRED_OBJECT_IS_NULL.to_string())
            }
            AppError::AccessDenied(msg) => ErrorKind::AccessDenied(msg.clone()),
            AppError::Validation(report) => ErrorKind::ValidationFailed(report.clone()),
            AppError::MalformedBody(cause) => ErrorKind::MalformedBody {
                cause: cause.clone(),
            },
            AppError::UnknownProperty(path) => ErrorKind::UnknownProperty { path: path.clone() },
            AppError::InvalidBodyValue {
                path,
                value,
                expected,
            } => ErrorKind::body_mismatch(path.as_str(), value.as_str(), expected.as_str()),
            AppError::InvalidParam {
                name,
                value,
                expected,
            } => ErrorKind::param_mismatch(name.as_str(), value.as_str(), expected.as_str()),
            AppError::RouteNotFound(url) => ErrorKind::RouteNotFound { url: url.clone() },
            AppError::Rejected { status, cause } => ErrorKind::Rejected {
                status: *status,
                cause: cause.clone(),
            },
            AppError::Database(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    ErrorKind::EntityInUse(MSG_ENTITY_IN_USE.to_string())
                }
                _ => ErrorKind::Unclassified {
                    cause: self.to_string(),
                },
            },
            AppError::Internal(_) => ErrorKind::Unclassified {
                cause: self.to_string(),
            },
        }
    }
}

/// Error kind waiting in the response extensions to be rendered by the problem layer
#[derive(Debug, Clone)]
pub struct PendingProblem(pub ErrorKind);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request failed");

        let kind = self.kind();
        let mut response = kind.status().into_response();
        response.extensions_mut().insert(PendingProblem(kind));
        response
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or_else(AppError::record_not_found)
    }
}

/// Convenience constructors
impl AppError {
    /// The standard lookup failure for an unknown ID
    pub fn record_not_found() -> Self {
        AppError::NotFound(MSG_NO_RECORDS_FOUND.to_string())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{MismatchLocation, Violation};

    #[test]
    fn none_becomes_not_found() {
        let err = None::<i64>.ok_or_not_found().unwrap_err();

        assert_eq!(
            err.kind(),
            ErrorKind::EntityNotFound("No records found for this ID!".to_string())
        );
    }

    #[test]
    fn required_object_is_business_rule() {
        assert_eq!(
            AppError::RequiredObjectIsNull.kind(),
            ErrorKind::BusinessRuleViolated(MSG_REQUIRED_OBJECT_IS_NULL.to_string())
        );
    }

    #[test]
    fn other_database_errors_are_unclassified() {
        let err = AppError::Database(DbErr::Query(sea_orm::RuntimeErr::Internal(
            "whatever".to_string(),
        )));

        assert!(matches!(err.kind(), ErrorKind::Unclassified { .. }));
    }

    #[test]
    fn internal_keeps_cause_for_diagnostics() {
        let kind = AppError::internal("pool exhausted").kind();

        match kind {
            ErrorKind::Unclassified { cause } => assert!(cause.contains("pool exhausted")),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn param_and_body_mismatches_keep_their_location() {
        let param = AppError::InvalidParam {
            name: "id".to_string(),
            value: "abc".to_string(),
            expected: "i64".to_string(),
        };
        let body = AppError::InvalidBodyValue {
            path: "price".to_string(),
            value: "abc".to_string(),
            expected: "f64".to_string(),
        };

        assert!(matches!(
            param.kind(),
            ErrorKind::TypeMismatch { location: MismatchLocation::Parameter, .. }
        ));
        assert!(matches!(
            body.kind(),
            ErrorKind::TypeMismatch { location: MismatchLocation::Body, .. }
        ));
    }

    #[test]
    fn into_response_carries_status_and_pending_kind() {
        let report = ValidationReport::new("book", vec![Violation::field("title", "not_blank")]);
        let response = AppError::Validation(report.clone()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let pending = response.extensions().get::<PendingProblem>().unwrap();
        assert_eq!(pending.0, ErrorKind::ValidationFailed(report));
    }

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
            (AppError::EntityInUse("x".to_string()), StatusCode::CONFLICT),
            (AppError::Business("x".to_string()), StatusCode::BAD_REQUEST),
            (AppError::AccessDenied("x".to_string()), StatusCode::FORBIDDEN),
            (AppError::RouteNotFound("/x".to_string()), StatusCode::NOT_FOUND),
            (AppError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::Rejected {
                    status: StatusCode::PAYLOAD_TOO_LARGE,
                    cause: "length limit exceeded".to_string(),
                },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
