//! Book domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{not_blank, not_in_future, ValidatedPayload};
use crate::problem::{ValidationReport, Violation};

/// Book domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Michael C. Feathers")]
    pub author: String,
    pub launch_date: DateTime<Utc>,
    #[schema(example = 49.0)]
    pub price: f64,
    #[schema(example = "Working effectively with legacy code")]
    pub title: String,
}

impl TryFrom<BookRequest> for Book {
    type Error = ValidationReport;

    /// Build a book from a request; an absent id becomes 0 and is assigned on insert.
    fn try_from(request: BookRequest) -> Result<Self, Self::Error> {
        let launch_date = request.launch_date.ok_or_else(|| {
            ValidationReport::new(
                BookRequest::OBJECT_NAME,
                vec![Violation::field("launch_date", "not_null")],
            )
        })?;

        Ok(Self {
            id: request.id.unwrap_or_default(),
            author: request.author,
            launch_date,
            price: request.price,
            title: request.title,
        })
    }
}

/// Book create/update payload
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BookRequest {
    /// Target of an update; ignored on create
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[validate(custom(function = "not_blank"), length(max = 180, code = "max_length"))]
    #[schema(example = "Michael C. Feathers")]
    pub author: String,
    #[validate(required(code = "not_null"), custom(function = "not_in_future"))]
    pub launch_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0.0, code = "positive"))]
    #[schema(example = 49.0)]
    pub price: f64,
    #[validate(custom(function = "not_blank"), length(max = 250, code = "max_length"))]
    #[schema(example = "Working effectively with legacy code")]
    pub title: String,
}

impl ValidatedPayload for BookRequest {
    const OBJECT_NAME: &'static str = "book";
    const FIELDS: &'static [&'static str] = &["author", "launch_date", "price", "title"];
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn valid_request() -> BookRequest {
        BookRequest {
            id: None,
            author: "Author Test 1".to_string(),
            launch_date: Some(Utc.with_ymd_and_hms(2017, 11, 29, 13, 50, 5).unwrap()),
            price: 11.5,
            title: "Test book 1".to_string(),
        }
    }

    #[test]
    fn negative_price_fails() {
        let request = BookRequest {
            price: -1.0,
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.field_errors()["price"][0].code, "positive");
    }

    #[test]
    fn default_request_is_invalid() {
        let errors = BookRequest::default().validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("title"));
        assert!(!fields.contains_key("price"));
        assert_eq!(fields["launch_date"][0].code, "not_null");
    }

    #[test]
    fn future_launch_date_fails() {
        let request = BookRequest {
            launch_date: Some(Utc::now() + Duration::days(30)),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.field_errors()["launch_date"][0].code, "launch_date");
    }

    #[test]
    fn converts_into_book() {
        let book = Book::try_from(BookRequest {
            id: Some(4),
            ..valid_request()
        })
        .unwrap();

        assert_eq!(book.id, 4);
        assert_eq!(
            book.launch_date,
            Utc.with_ymd_and_hms(2017, 11, 29, 13, 50, 5).unwrap()
        );
    }

    #[test]
    fn missing_launch_date_does_not_convert() {
        let report = Book::try_from(BookRequest {
            launch_date: None,
            ..valid_request()
        })
        .unwrap_err();

        assert_eq!(report.object_name, "book");
        assert_eq!(report.violations, vec![Violation::field("launch_date", "not_null")]);
    }
}
