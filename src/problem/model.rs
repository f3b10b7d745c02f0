//! Problem document returned to API callers.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::ProblemType;

/// Content type of rendered problem documents
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// `type` of problems that belong to no category; the title is the status reason phrase
pub const ABOUT_BLANK: &str = "about:blank";

/// One validation violation attached to a field (or to the whole object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldProblem {
    /// Offending field, or the validated object's name for object-level violations
    #[serde(rename = "name")]
    #[schema(example = "first_name")]
    pub field_name: String,
    /// Localized message describing the violation
    #[schema(example = "First name is required")]
    pub user_message: String,
}

/// Normalized error response document
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[schema(example = 404)]
    pub status: u16,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    #[schema(example = "https://course-api.dev/problems/resource-not-found")]
    pub type_uri: String,
    #[schema(example = "Resource not found")]
    pub title: String,
    #[schema(example = "No records found for this ID!")]
    pub detail: String,
    pub user_message: String,
    #[serde(rename = "objects", skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldProblem>,
}

impl Problem {
    /// Start a problem of the given type; `user_message` defaults to `detail`.
    pub fn new(
        status: u16,
        problem_type: impl Into<Option<ProblemType>>,
        detail: impl Into<String>,
    ) -> Self {
        let detail = detail.into();
        let (type_uri, title) = match problem_type.into() {
            Some(problem_type) => (problem_type.uri(), problem_type.title().to_string()),
            None => (ABOUT_BLANK.to_string(), reason_phrase(status).to_string()),
        };
        Self {
            status,
            timestamp: Utc::now(),
            type_uri,
            title,
            user_message: detail.clone(),
            detail,
            fields: Vec::new(),
        }
    }

    pub fn with_user_message(mut self, user_message: impl Into<String>) -> Self {
        self.user_message = user_message.into();
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldProblem>) -> Self {
        self.fields = fields;
        self
    }
}

pub fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown status")
}
