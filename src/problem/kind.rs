//! Failure kinds recognized by the problem translator.

use std::collections::BTreeMap;

use axum::http::StatusCode;

/// Where a type-mismatched value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchLocation {
    /// A field of the JSON request body
    Body,
    /// A path segment or query string parameter
    Parameter,
}

/// A single validation violation as reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Offending field; `None` for object-level violations
    pub field: Option<String>,
    /// Message key, e.g. `not_blank` or `size`
    pub code: String,
    /// Values available to message interpolation (`{min}`, `{max}`, ...)
    pub params: BTreeMap<String, String>,
    /// Message attached at the validation site, used when no catalog entry matches
    pub default_message: Option<String>,
}

impl Violation {
    /// Field-level violation
    pub fn field(field: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            code: code.into(),
            params: BTreeMap::new(),
            default_message: None,
        }
    }

    /// Object-level violation (not attached to a single field)
    pub fn object(code: impl Into<String>) -> Self {
        Self {
            field: None,
            code: code.into(),
            params: BTreeMap::new(),
            default_message: None,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }
}

/// Violations reported for one validated object, in reporting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Name of the validated object, e.g. `person`
    pub object_name: String,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(object_name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            object_name: object_name.into(),
            violations,
        }
    }
}

/// The closed set of failure causes.
///
/// Every failed request is classified as exactly one kind before
/// translation. Anything that is not one of the explicit kinds is
/// `Unclassified`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationFailed(ValidationReport),
    MalformedBody {
        cause: String,
    },
    UnknownProperty {
        path: String,
    },
    TypeMismatch {
        location: MismatchLocation,
        name: String,
        value: String,
        expected: String,
    },
    RouteNotFound {
        url: String,
    },
    EntityNotFound(String),
    EntityInUse(String),
    BusinessRuleViolated(String),
    AccessDenied(String),
    Unclassified {
        cause: String,
    },
    /// Rejected by the framework with a status outside the problem categories
    Rejected {
        status: StatusCode,
        cause: String,
    },
}

impl ErrorKind {
    /// Parameter type mismatch (path segment or query string)
    pub fn param_mismatch(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        ErrorKind::TypeMismatch {
            location: MismatchLocation::Parameter,
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Body field type mismatch
    pub fn body_mismatch(
        path: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        ErrorKind::TypeMismatch {
            location: MismatchLocation::Body,
            name: path.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

/// Last `::`-separated segment of a type name (`alloc::string::String` -> `String`)
pub fn simple_type_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_type_name_strips_module_path() {
        assert_eq!(simple_type_name("i64"), "i64");
        assert_eq!(simple_type_name("alloc::string::String"), "String");
        assert_eq!(simple_type_name("core::option::Option<i64>"), "Option");
    }

    #[test]
    fn violation_builders() {
        let violation = Violation::field("title", "size")
            .with_param("min", "1")
            .with_param("max", "80")
            .with_default_message("bad size");

        assert_eq!(violation.field.as_deref(), Some("title"));
        assert_eq!(violation.params["min"], "1");
        assert_eq!(violation.default_message.as_deref(), Some("bad size"));
        assert!(Violation::object("dates").field.is_none());
    }
}
