//! Problem responses - the error-to-problem translation layer.
//!
//! Every failed request is classified into one [`ErrorKind`] and then
//! translated into a [`Problem`] document with a stable [`ProblemType`],
//! localized field messages and the matching HTTP status.

mod fields;
mod kind;
mod locale;
mod messages;
mod model;
mod problem_type;
mod translator;

pub use fields::collect_field_problems;
pub use kind::{simple_type_name, ErrorKind, MismatchLocation, ValidationReport, Violation};
pub use locale::Locale;
pub use messages::{MessageCatalog, MessageSource};
pub use model::{FieldProblem, Problem, ABOUT_BLANK, APPLICATION_PROBLEM_JSON};
pub use problem_type::ProblemType;
pub use translator::{
    ProblemTranslator, ACCESS_DENIED_USER_MESSAGE, GENERIC_USER_MESSAGE, INVALID_DATA_DETAIL,
    MALFORMED_BODY_DETAIL,
};

#[cfg(test)]
pub use messages::MockMessageSource;
