//! Person domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{not_blank, valid_gender, ValidatedPayload};

/// Person domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ayrton")]
    pub first_name: String,
    #[schema(example = "Senna")]
    pub last_name: String,
    #[schema(example = "São Paulo - Brasil")]
    pub address: String,
    #[schema(example = "Male")]
    pub gender: String,
    /// Disabled people stay listed but are flagged
    pub enabled: bool,
}

impl Person {
    /// Apply the editable fields of a request
    pub fn apply(&mut self, request: PersonRequest) {
        self.first_name = request.first_name;
        self.last_name = request.last_name;
        self.address = request.address;
        self.gender = request.gender;
    }
}

/// Person create/update payload
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct PersonRequest {
    /// Target of an update; ignored on create
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[validate(custom(function = "not_blank"), length(max = 80, code = "max_length"))]
    #[schema(example = "Ayrton")]
    pub first_name: String,
    #[validate(custom(function = "not_blank"), length(max = 80, code = "max_length"))]
    #[schema(example = "Senna")]
    pub last_name: String,
    #[validate(custom(function = "not_blank"), length(max = 100, code = "max_length"))]
    #[schema(example = "São Paulo - Brasil")]
    pub address: String,
    #[validate(custom(function = "valid_gender"))]
    #[schema(example = "Male")]
    pub gender: String,
}

impl ValidatedPayload for PersonRequest {
    const OBJECT_NAME: &'static str = "person";
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "address", "gender"];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> PersonRequest {
        PersonRequest {
            id: None,
            first_name: "Ayrton".to_string(),
            last_name: "Senna".to_string(),
            address: "São Paulo - Brasil".to_string(),
            gender: "Male".to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn blank_and_unknown_values_fail() {
        let request = PersonRequest {
            first_name: " ".to_string(),
            gender: "Robot".to_string(),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields["first_name"][0].code, "not_blank");
        assert_eq!(fields["gender"][0].code, "gender");
        assert!(!fields.contains_key("last_name"));
    }

    #[test]
    fn too_long_name_fails_with_max_length() {
        let request = PersonRequest {
            last_name: "x".repeat(81),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.field_errors()["last_name"][0].code, "max_length");
    }

    #[test]
    fn apply_copies_editable_fields() {
        let mut person = Person {
            id: 7,
            first_name: "Old".to_string(),
            last_name: "Name".to_string(),
            address: "Nowhere".to_string(),
            gender: "Female".to_string(),
            enabled: false,
        };

        person.apply(valid_request());

        assert_eq!(person.id, 7);
        assert_eq!(person.first_name, "Ayrton");
        assert_eq!(person.gender, "Male");
        assert!(!person.enabled);
    }
}
