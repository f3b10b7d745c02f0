//! Path parameter extractor with typed parse failures.

use axum::{
    async_trait,
    extract::{
        path::ErrorKind as PathErrorKind, rejection::PathRejection, FromRequestParts, Path,
        RawPathParams,
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::problem::simple_type_name;

/// Like [`Path`], but a segment that does not parse as the target type
/// is rejected as an invalid parameter naming the segment, the raw value
/// and the expected type.
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                let mut err = from_path_error(e.into_kind());
                if let AppError::InvalidParam { name, value, .. } = &mut err {
                    if name.is_empty() {
                        // Single-value paths report no key; recover it from the raw params
                        *name = RawPathParams::from_request_parts(parts, state)
                            .await
                            .ok()
                            .and_then(|raw| {
                                raw.iter()
                                    .find(|(_, raw_value)| *raw_value == value.as_str())
                                    .map(|(key, _)| key.to_string())
                            })
                            .unwrap_or_else(|| "path".to_string());
                    }
                }
                Err(err)
            }
            Err(e) => Err(AppError::internal(e.body_text())),
        }
    }
}

fn from_path_error(kind: PathErrorKind) -> AppError {
    match kind {
        PathErrorKind::ParseErrorAtKey {
            key,
            value,
            expected_type,
        } => AppError::InvalidParam {
            name: key,
            value,
            expected: simple_type_name(expected_type).to_string(),
        },
        PathErrorKind::ParseErrorAtIndex {
            index,
            value,
            expected_type,
        } => AppError::InvalidParam {
            name: index.to_string(),
            value,
            expected: simple_type_name(expected_type).to_string(),
        },
        PathErrorKind::ParseError {
            value,
            expected_type,
        } => AppError::InvalidParam {
            name: String::new(),
            value,
            expected: simple_type_name(expected_type).to_string(),
        },
        other => AppError::internal(format!("Unusable path parameters: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ErrorKind, MismatchLocation};

    #[test]
    fn parse_error_at_key_names_the_parameter() {
        let err = from_path_error(PathErrorKind::ParseErrorAtKey {
            key: "id".to_string(),
            value: "abc".to_string(),
            expected_type: "i64",
        });

        assert_eq!(
            err.kind(),
            ErrorKind::TypeMismatch {
                location: MismatchLocation::Parameter,
                name: "id".to_string(),
                value: "abc".to_string(),
                expected: "i64".to_string(),
            }
        );
    }

    #[test]
    fn wrong_parameter_count_is_internal() {
        let err = from_path_error(PathErrorKind::WrongNumberOfParameters {
            got: 2,
            expected: 1,
        });

        assert!(matches!(err, AppError::Internal(_)));
    }
}
