//! Field-error aggregation for validation failures.

use std::collections::BTreeMap;

use super::{FieldProblem, Locale, MessageSource, ValidationReport, Violation};

/// Build the `objects` list of a validation problem.
///
/// One entry per violation, in the order the validator reported them.
/// Object-level violations are attributed to the object name.
pub fn collect_field_problems(
    report: &ValidationReport,
    messages: &dyn MessageSource,
    locale: Locale,
) -> Vec<FieldProblem> {
    report
        .violations
        .iter()
        .map(|violation| FieldProblem {
            field_name: violation
                .field
                .clone()
                .unwrap_or_else(|| report.object_name.clone()),
            user_message: resolve_message(violation, &report.object_name, messages, locale),
        })
        .collect()
}

/// Resolve a violation's message, most specific key first:
/// `code.object.field`, `code.field`, `code`, then the default message,
/// then the bare code.
fn resolve_message(
    violation: &Violation,
    object_name: &str,
    messages: &dyn MessageSource,
    locale: Locale,
) -> String {
    let code = violation.code.as_str();
    let mut keys = Vec::with_capacity(3);
    match violation.field.as_deref() {
        Some(field) => {
            keys.push(format!("{}.{}.{}", code, object_name, field));
            keys.push(format!("{}.{}", code, field));
        }
        None => keys.push(format!("{}.{}", code, object_name)),
    }
    keys.push(code.to_string());

    let template = keys
        .iter()
        .find_map(|key| messages.message(key, locale))
        .or_else(|| violation.default_message.clone())
        .unwrap_or_else(|| code.to_string());

    interpolate(&template, &violation.params)
}

/// Replace `{name}` placeholders with parameter values; unknown placeholders are kept.
fn interpolate(template: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => {
                let name = &tail[1..end];
                match params.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::problem::{MessageCatalog, MockMessageSource};

    fn report(violations: Vec<Violation>) -> ValidationReport {
        ValidationReport::new("person", violations)
    }

    #[test]
    fn preserves_report_order() {
        let report = report(vec![
            Violation::field("last_name", "not_blank"),
            Violation::field("address", "not_blank"),
            Violation::field("first_name", "not_blank"),
            Violation::field("address", "size")
                .with_param("min", "1")
                .with_param("max", "100"),
        ]);

        let fields = collect_field_problems(&report, &MessageCatalog::new(), Locale::En);

        let names: Vec<_> = fields.iter().map(|f| f.field_name.as_str()).collect();
        assert_eq!(names, ["last_name", "address", "first_name", "address"]);
        assert_eq!(fields[3].user_message, "size must be between 1 and 100");
    }

    #[test]
    fn object_level_violation_uses_object_name() {
        let report = report(vec![Violation::object("gender")]);

        let fields = collect_field_problems(&report, &MessageCatalog::new(), Locale::En);

        assert_eq!(fields[0].field_name, "person");
        assert_eq!(fields[0].user_message, "must be either Male or Female");
    }

    #[test]
    fn most_specific_key_wins() {
        let report = report(vec![
            Violation::field("first_name", "not_blank"),
            Violation::field("address", "not_blank"),
        ]);

        let fields = collect_field_problems(&report, &MessageCatalog::new(), Locale::PtBr);

        assert_eq!(fields[0].user_message, "O primeiro nome é obrigatório");
        assert_eq!(fields[1].user_message, "não deve estar em branco");
    }

    #[test]
    fn falls_back_to_default_message_then_code() {
        let report = report(vec![
            Violation::field("nickname", "custom_rule").with_default_message("too {adj}"),
            Violation::field("nickname", "other_rule"),
        ]);
        let mut messages = MockMessageSource::new();
        messages.expect_message().returning(|_, _| None);

        let fields = collect_field_problems(&report, &messages, Locale::En);

        assert_eq!(fields[0].user_message, "too {adj}");
        assert_eq!(fields[1].user_message, "other_rule");
    }

    #[test]
    fn consults_the_requested_locale() {
        let report = report(vec![Violation::field("title", "not_blank")]);
        let mut messages = MockMessageSource::new();
        for key in ["not_blank.person.title", "not_blank.title"] {
            messages
                .expect_message()
                .with(eq(key), eq(Locale::PtBr))
                .times(1)
                .returning(|_, _| None);
        }
        messages
            .expect_message()
            .with(eq("not_blank"), eq(Locale::PtBr))
            .times(1)
            .returning(|_, _| Some("obrigatório".to_string()));

        let fields = collect_field_problems(&report, &messages, Locale::PtBr);

        assert_eq!(fields[0].user_message, "obrigatório");
    }

    #[test]
    fn keeps_duplicates() {
        let report = report(vec![
            Violation::field("title", "not_blank"),
            Violation::field("title", "not_blank"),
        ]);

        let fields = collect_field_problems(&report, &MessageCatalog::new(), Locale::En);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], fields[1]);
    }

    #[test]
    fn interpolate_placeholders() {
        let params = BTreeMap::from([
            ("min".to_string(), "2".to_string()),
            ("max".to_string(), "5".to_string()),
        ]);

        assert_eq!(interpolate("from {min} to {max}", &params), "from 2 to 5");
        assert_eq!(interpolate("keep {other}", &params), "keep {other}");
        assert_eq!(interpolate("open {min", &params), "open {min");
        assert_eq!(interpolate("plain", &params), "plain");
    }
}
