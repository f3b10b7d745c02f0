//! Locale-aware message lookup for validation messages.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Locale;

/// Message lookup capability used to localize validation messages.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSource: Send + Sync {
    /// Raw message template for `key` in `locale`, if one is defined
    fn message(&self, key: &str, locale: Locale) -> Option<String>;
}

type Bundle = HashMap<&'static str, &'static str>;

static BASE_BUNDLE: Lazy<Bundle> = Lazy::new(|| {
    HashMap::from([
        ("not_blank", "must not be blank"),
        ("size", "size must be between {min} and {max}"),
        ("range", "must be between {min} and {max}"),
        ("positive", "must be greater than or equal to {min}"),
        ("max_length", "must not exceed {max} characters"),
        ("gender", "must be either Male or Female"),
        ("not_null", "must not be null"),
        ("not_blank.person.first_name", "First name is required"),
        ("not_blank.person.last_name", "Last name is required"),
        ("not_blank.book.title", "Book title is required"),
        ("launch_date", "launch date cannot be in the future"),
    ])
});

static PT_BR_BUNDLE: Lazy<Bundle> = Lazy::new(|| {
    HashMap::from([
        ("not_blank", "não deve estar em branco"),
        ("size", "tamanho deve ser entre {min} e {max}"),
        ("range", "deve estar entre {min} e {max}"),
        ("positive", "deve ser maior ou igual a {min}"),
        ("max_length", "não deve exceder {max} caracteres"),
        ("gender", "deve ser Male ou Female"),
        ("not_null", "não deve ser nulo"),
        ("not_blank.person.first_name", "O primeiro nome é obrigatório"),
        ("not_blank.person.last_name", "O sobrenome é obrigatório"),
        ("not_blank.book.title", "O título do livro é obrigatório"),
        ("launch_date", "a data de lançamento não pode estar no futuro"),
    ])
});

/// Built-in message bundles: `en` is the base bundle and every other
/// locale falls back to it for keys it does not define.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCatalog;

impl MessageCatalog {
    pub fn new() -> Self {
        Self
    }

    fn bundle(locale: Locale) -> &'static Bundle {
        match locale {
            Locale::En => &BASE_BUNDLE,
            Locale::PtBr => &PT_BR_BUNDLE,
        }
    }
}

impl MessageSource for MessageCatalog {
    fn message(&self, key: &str, locale: Locale) -> Option<String> {
        Self::bundle(locale)
            .get(key)
            .or_else(|| BASE_BUNDLE.get(key))
            .map(|m| m.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_locale_bundle() {
        let catalog = MessageCatalog::new();

        assert_eq!(
            catalog.message("not_blank", Locale::En).as_deref(),
            Some("must not be blank")
        );
        assert_eq!(
            catalog.message("not_blank", Locale::PtBr).as_deref(),
            Some("não deve estar em branco")
        );
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(MessageCatalog::new().message("nope", Locale::PtBr).is_none());
    }

    #[test]
    fn bundles_define_the_same_keys() {
        let mut base: Vec<_> = BASE_BUNDLE.keys().collect();
        let mut pt_br: Vec<_> = PT_BR_BUNDLE.keys().collect();
        base.sort();
        pt_br.sort();
        assert_eq!(base, pt_br);
    }
}
