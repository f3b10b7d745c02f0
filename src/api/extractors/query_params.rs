//! Query string extractor with typed parameter access.

use std::any::type_name;
use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::errors::{AppError, AppResult};
use crate::problem::simple_type_name;

/// Raw query parameters, parsed on access.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self(params)
    }

    /// Parse parameter `name`; a value that does not parse is an invalid parameter.
    pub fn get<T: FromStr>(&self, name: &str) -> AppResult<Option<T>> {
        match self.0.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|_| AppError::InvalidParam {
                    name: name.to_string(),
                    value: raw.clone(),
                    expected: simple_type_name(type_name::<T>()).to_string(),
                }),
        }
    }

    /// Parameter as text, ignoring empty values
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let result = Query::<HashMap<String, String>>::from_request_parts(parts, state).await;
        let Query(params) = result.map_err(|e| {
            tracing::debug!("Unreadable query string: {}", e.body_text());
            AppError::InvalidParam {
                name: "query".to_string(),
                value: parts.uri.query().unwrap_or_default().to_string(),
                expected: "url-encoded query string".to_string(),
            }
        })?;
        Ok(Self(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn parses_present_values() {
        let query = params(&[("enabled", "true")]);

        assert_eq!(query.get::<bool>("enabled").unwrap(), Some(true));
        assert_eq!(query.get::<i64>("missing").unwrap(), None);
    }

    #[test]
    fn unparsable_value_is_invalid_param() {
        let query = params(&[("enabled", "maybe")]);

        match query.get::<bool>("enabled").unwrap_err() {
            AppError::InvalidParam {
                name,
                value,
                expected,
            } => {
                assert_eq!(name, "enabled");
                assert_eq!(value, "maybe");
                assert_eq!(expected, "bool");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn text_skips_empty_values() {
        let query = params(&[("first_name", ""), ("last_name", "Senna")]);

        assert_eq!(query.text("first_name"), None);
        assert_eq!(query.text("last_name"), Some("Senna"));
    }
}
