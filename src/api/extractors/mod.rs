//! Custom extractors whose rejections are classified application errors.

mod path_param;
mod query_params;
mod validated_json;

pub use path_param::PathParam;
pub use query_params::QueryParams;
pub use validated_json::{parse_json_body, validation_report, ValidatedJson};
