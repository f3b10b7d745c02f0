//! Validated JSON extractor - Combines deserialization with validation.

use std::collections::BTreeMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::ValidatedPayload;
use crate::errors::{AppError, AppResult};
use crate::problem::{ValidationReport, Violation};

/// Key validator uses for struct-level (schema) errors
const OBJECT_LEVEL_KEY: &str = "__all__";

/// Validated JSON extractor that automatically validates requests.
///
/// Body failures are classified before validation runs:
/// - unreadable JSON or a wrong content type: malformed body
/// - a `null` document: required object is null
/// - an unknown property: unknown property with its dotted path
/// - a value of the wrong JSON type: body type mismatch
///
/// # Example
///
/// ```rust,ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<PersonRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidatedPayload,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::MalformedBody(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| match e.status() {
                StatusCode::BAD_REQUEST => AppError::MalformedBody(e.body_text()),
                status => AppError::Rejected {
                    status,
                    cause: e.body_text(),
                },
            })?;

        let value: T = parse_json_body(&bytes)?;

        value
            .validate()
            .map_err(|e| AppError::Validation(validation_report::<T>(&e)))?;

        Ok(ValidatedJson(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// Deserialize a JSON body, classifying every failure.
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> AppResult<T> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|e| AppError::MalformedBody(e.to_string()))?;

    if document.is_null() {
        return Err(AppError::RequiredObjectIsNull);
    }

    serde_path_to_error::deserialize(&document).map_err(|err| classify_data_error(&document, err))
}

fn classify_data_error(
    document: &Value,
    err: serde_path_to_error::Error<serde_json::Error>,
) -> AppError {
    let segments: Vec<&Segment> = err.path().iter().collect();
    let mut path: Vec<String> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(index.to_string()),
            Segment::Map { key } => Some(key.clone()),
            Segment::Enum { variant } => Some(variant.clone()),
            Segment::Unknown => None,
        })
        .collect();
    let message = err.inner().to_string();

    if let Some(field) = between(&message, "unknown field `", "`") {
        if path.last().map(String::as_str) != Some(field) {
            path.push(field.to_string());
        }
        return AppError::UnknownProperty(path.join("."));
    }

    let mismatch = message
        .strip_prefix("invalid type: ")
        .or_else(|| message.strip_prefix("invalid value: "))
        .and_then(|rest| rest.split_once(", expected "));

    if let Some((unexpected, expected)) = mismatch {
        let value = value_at(document, &segments).unwrap_or_else(|| unexpected.to_string());
        return AppError::InvalidBodyValue {
            path: path.join("."),
            value,
            expected: expected_type_name(expected),
        };
    }

    AppError::MalformedBody(format!("{}: {}", err.path(), message))
}

/// Text between the first `start` marker and the following `end` marker
fn between<'a>(message: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let rest = &message[message.find(start)? + start.len()..];
    rest.find(end).map(|i| &rest[..i])
}

/// Raw value at a deserialization path, rendered without JSON quoting for strings
fn value_at(document: &Value, segments: &[&Segment]) -> Option<String> {
    let mut current = document;
    for segment in segments {
        current = match segment {
            Segment::Seq { index } => current.get(*index)?,
            Segment::Map { key } => current.get(key.as_str())?,
            Segment::Enum { .. } | Segment::Unknown => return None,
        };
    }
    Some(render_value(current))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reduce serde's expectation text to a type name (`a string` -> `string`, `struct Book` -> `Book`)
fn expected_type_name(expected: &str) -> String {
    let expected = expected.trim();
    let name = expected
        .strip_prefix("struct ")
        .or_else(|| expected.strip_prefix("an "))
        .or_else(|| expected.strip_prefix("a "))
        .unwrap_or(expected);
    name.trim_matches('`').to_string()
}

/// Convert validator output into a report ordered by the payload's declared fields.
pub fn validation_report<T: ValidatedPayload>(errors: &ValidationErrors) -> ValidationReport {
    let mut violations = Vec::new();
    let all = errors.errors();

    for field in T::FIELDS {
        if let Some(kind) = all.get(field) {
            collect(field, kind, &mut violations);
        }
    }

    let mut remaining: Vec<_> = all
        .iter()
        .filter(|(key, _)| **key != OBJECT_LEVEL_KEY && !T::FIELDS.contains(*key))
        .collect();
    remaining.sort_by_key(|(key, _)| **key);
    for (field, kind) in remaining {
        collect(field, kind, &mut violations);
    }

    if let Some(ValidationErrorsKind::Field(errs)) = all.get(OBJECT_LEVEL_KEY) {
        violations.extend(errs.iter().map(|e| to_violation(None, e)));
    }

    ValidationReport::new(T::OBJECT_NAME, violations)
}

fn collect(path: &str, kind: &ValidationErrorsKind, out: &mut Vec<Violation>) {
    match kind {
        ValidationErrorsKind::Field(errs) => {
            out.extend(errs.iter().map(|e| to_violation(Some(path), e)));
        }
        ValidationErrorsKind::Struct(nested) => {
            let mut keys: Vec<_> = nested.errors().keys().collect();
            keys.sort();
            for key in keys {
                let nested_path = format!("{}.{}", path, key);
                collect(&nested_path, &nested.errors()[key], out);
            }
        }
        ValidationErrorsKind::List(items) => {
            for (index, nested) in items {
                let mut keys: Vec<_> = nested.errors().keys().collect();
                keys.sort();
                for key in keys {
                    let nested_path = format!("{}.{}.{}", path, index, key);
                    collect(&nested_path, &nested.errors()[key], out);
                }
            }
        }
    }
}

fn to_violation(field: Option<&str>, error: &ValidationError) -> Violation {
    let params: BTreeMap<String, String> = error
        .params
        .iter()
        .map(|(name, value)| (name.to_string(), render_value(value)))
        .collect();

    Violation {
        field: field.map(str::to_string),
        code: error.code.to_string(),
        params,
        default_message: error.message.as_ref().map(|m| m.to_string()),
    }
}
