//! Problem taxonomy - the fixed set of problem categories.

use crate::config::PROBLEM_TYPE_BASE_URI;

/// Category of a problem document.
///
/// The set is closed and read-only; every problem the API classifies
/// belongs to exactly one of these. Framework rejections outside the set
/// are rendered as `about:blank`. The slug is the category's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemType {
    InvalidData,
    SystemError,
    InvalidParam,
    IncompatibleBody,
    ResourceNotFound,
    EntityInUse,
    BusinessError,
    AccessDenied,
}

impl ProblemType {
    /// All problem types, in declaration order
    pub const ALL: [ProblemType; 8] = [
        ProblemType::InvalidData,
        ProblemType::SystemError,
        ProblemType::InvalidParam,
        ProblemType::IncompatibleBody,
        ProblemType::ResourceNotFound,
        ProblemType::EntityInUse,
        ProblemType::BusinessError,
        ProblemType::AccessDenied,
    ];

    /// Path segment appended to the problem base URI
    pub fn slug(self) -> &'static str {
        match self {
            ProblemType::InvalidData => "/invalid-data",
            ProblemType::SystemError => "/system-error",
            ProblemType::InvalidParam => "/invalid-param-url",
            ProblemType::IncompatibleBody => "/incompatible-body",
            ProblemType::ResourceNotFound => "/resource-not-found",
            ProblemType::EntityInUse => "/entity-in-use",
            ProblemType::BusinessError => "/business-error",
            ProblemType::AccessDenied => "/access-denied",
        }
    }

    /// Short human-readable summary shared by every problem of this type
    pub fn title(self) -> &'static str {
        match self {
            ProblemType::InvalidData => "Invalid data",
            ProblemType::SystemError => "System error",
            ProblemType::InvalidParam => "Invalid parameter type",
            ProblemType::IncompatibleBody => "Incompatible message body",
            ProblemType::ResourceNotFound => "Resource not found",
            ProblemType::EntityInUse => "Entity in use",
            ProblemType::BusinessError => "Business rule violation",
            ProblemType::AccessDenied => "Access denied",
        }
    }

    /// Full type URI, e.g. `https://course-api.dev/problems/invalid-data`
    pub fn uri(self) -> String {
        format!("{}{}", PROBLEM_TYPE_BASE_URI, self.slug())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = ProblemType::ALL.iter().map(|t| t.slug()).collect();
        assert_eq!(slugs.len(), ProblemType::ALL.len());
    }

    #[test]
    fn uri_is_rooted_at_base() {
        for problem_type in ProblemType::ALL {
            let uri = problem_type.uri();
            assert!(uri.starts_with(PROBLEM_TYPE_BASE_URI));
            assert!(uri.ends_with(problem_type.slug()));
        }
    }
}
