//! Problem translator - turns a classified failure into a problem document.

use std::sync::Arc;

use axum::http::StatusCode;

use super::fields::collect_field_problems;
use super::model::reason_phrase;
use super::{ErrorKind, Locale, MessageSource, MismatchLocation, Problem, ProblemType};

/// Shown to callers whenever the precise reason must not be disclosed
pub const GENERIC_USER_MESSAGE: &str = "An unexpected internal system error occurred. \
     Try again and if the problem persists, contact the system administrator.";

/// Detail of every validation problem
pub const INVALID_DATA_DETAIL: &str =
    "One or more fields are invalid. Fill them in correctly and try again.";

/// Detail of a body that could not be parsed at all
pub const MALFORMED_BODY_DETAIL: &str = "The request body is invalid. Check for syntax errors.";

/// User message of access-denied problems
pub const ACCESS_DENIED_USER_MESSAGE: &str =
    "You do not have permission to perform this operation.";

impl ErrorKind {
    /// Problem category of this kind; `None` for framework rejections
    pub fn problem_type(&self) -> Option<ProblemType> {
        let problem_type = match self {
            ErrorKind::ValidationFailed(_) => ProblemType::InvalidData,
            ErrorKind::MalformedBody { .. } | ErrorKind::UnknownProperty { .. } => {
                ProblemType::IncompatibleBody
            }
            ErrorKind::TypeMismatch { location, .. } => match location {
                MismatchLocation::Body => ProblemType::IncompatibleBody,
                MismatchLocation::Parameter => ProblemType::InvalidParam,
            },
            ErrorKind::RouteNotFound { .. } | ErrorKind::EntityNotFound(_) => {
                ProblemType::ResourceNotFound
            }
            ErrorKind::EntityInUse(_) => ProblemType::EntityInUse,
            ErrorKind::BusinessRuleViolated(_) => ProblemType::BusinessError,
            ErrorKind::AccessDenied(_) => ProblemType::AccessDenied,
            ErrorKind::Unclassified { .. } => ProblemType::SystemError,
            ErrorKind::Rejected { .. } => return None,
        };
        Some(problem_type)
    }

    /// HTTP status of this kind
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorKind::ValidationFailed(_)
            | ErrorKind::MalformedBody { .. }
            | ErrorKind::UnknownProperty { .. }
            | ErrorKind::TypeMismatch { .. }
            | ErrorKind::BusinessRuleViolated(_) => StatusCode::BAD_REQUEST,
            ErrorKind::RouteNotFound { .. } | ErrorKind::EntityNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ErrorKind::EntityInUse(_) => StatusCode::CONFLICT,
            ErrorKind::AccessDenied(_) => StatusCode::FORBIDDEN,
            ErrorKind::Unclassified { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Rejected { status, .. } => *status,
        }
    }
}

/// Converts failures into problem documents.
///
/// Stateless apart from the injected message source, so one instance is
/// shared by all requests.
#[derive(Clone)]
pub struct ProblemTranslator {
    messages: Arc<dyn MessageSource>,
}

impl ProblemTranslator {
    pub fn new(messages: Arc<dyn MessageSource>) -> Self {
        Self { messages }
    }

    /// Translate a failure into its problem document and HTTP status.
    ///
    /// Never fails. For `Unclassified` the cause is logged once and
    /// replaced by a generic message in the document.
    pub fn translate(&self, error: &ErrorKind, locale: Locale) -> (Problem, StatusCode) {
        let status = error.status();
        let problem_type = error.problem_type();
        let code = status.as_u16();

        let problem = match error {
            ErrorKind::ValidationFailed(report) => {
                let fields = collect_field_problems(report, self.messages.as_ref(), locale);
                Problem::new(code, problem_type, INVALID_DATA_DETAIL).with_fields(fields)
            }
            ErrorKind::MalformedBody { cause } => {
                tracing::debug!(cause = %cause, "Unreadable request body");
                Problem::new(code, problem_type, MALFORMED_BODY_DETAIL)
                    .with_user_message(GENERIC_USER_MESSAGE)
            }
            ErrorKind::UnknownProperty { path } => {
                let detail = format!(
                    "The property '{}' does not exist. Correct or remove this property and try again.",
                    path
                );
                Problem::new(code, problem_type, detail).with_user_message(GENERIC_USER_MESSAGE)
            }
            ErrorKind::TypeMismatch {
                location,
                name,
                value,
                expected,
            } => {
                let detail = match location {
                    MismatchLocation::Body => format!(
                        "The property '{}' received the value '{}', which is of an invalid type. \
                         Correct it and provide a value compatible with type {}.",
                        name, value, expected
                    ),
                    MismatchLocation::Parameter => format!(
                        "The URL parameter '{}' received the value '{}', which is of an invalid type. \
                         Correct it and provide a value compatible with type {}.",
                        name, value, expected
                    ),
                };
                Problem::new(code, problem_type, detail).with_user_message(GENERIC_USER_MESSAGE)
            }
            ErrorKind::RouteNotFound { url } => {
                let detail = format!(
                    "The resource {}, which you tried to access, does not exist.",
                    url
                );
                Problem::new(code, problem_type, detail).with_user_message(GENERIC_USER_MESSAGE)
            }
            ErrorKind::EntityNotFound(message) | ErrorKind::BusinessRuleViolated(message) => {
                Problem::new(code, problem_type, message.as_str())
                    .with_user_message(GENERIC_USER_MESSAGE)
            }
            ErrorKind::EntityInUse(message) => Problem::new(code, problem_type, message.as_str()),
            ErrorKind::AccessDenied(message) => Problem::new(code, problem_type, message.as_str())
                .with_user_message(ACCESS_DENIED_USER_MESSAGE),
            ErrorKind::Unclassified { cause } => {
                tracing::error!(cause = %cause, "Unhandled error while processing request");
                Problem::new(code, problem_type, GENERIC_USER_MESSAGE)
            }
            ErrorKind::Rejected { cause, .. } => {
                tracing::debug!(status = code, cause = %cause, "Request rejected before reaching a handler");
                Problem::new(code, problem_type, reason_phrase(code))
                    .with_user_message(GENERIC_USER_MESSAGE)
            }
        };

        (problem, status)
    }
}
