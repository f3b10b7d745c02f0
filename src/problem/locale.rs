//! Request locale negotiation.

use std::fmt;
use std::str::FromStr;

/// Locales with a message bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// BCP 47 language tag
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
        }
    }

    /// Pick the highest-quality supported language from an `Accept-Language` value.
    ///
    /// Example input: `pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7`. Unsupported or
    /// malformed entries are skipped; `fallback` is returned when nothing matches.
    pub fn negotiate(header: Option<&str>, fallback: Locale) -> Locale {
        let Some(header) = header else {
            return fallback;
        };

        let mut preferred = fallback;
        let mut max_quality = 0.0_f32;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let Some(tag) = parts.next() else { continue };
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .map(|q| q.parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);

            if let Ok(locale) = tag.parse::<Locale>() {
                if quality > max_quality {
                    preferred = locale;
                    max_quality = quality;
                }
            }
        }

        preferred
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::En),
            "pt" => Ok(Locale::PtBr),
            _ => Err(format!("unsupported locale: {}", s)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_tags() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("pt_br".parse::<Locale>(), Ok(Locale::PtBr));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn negotiate_uses_quality() {
        let locale = Locale::negotiate(Some("en;q=0.5,pt-BR;q=0.9"), Locale::En);
        assert_eq!(locale, Locale::PtBr);

        let locale = Locale::negotiate(Some("pt-BR;q=0.4, en-US"), Locale::PtBr);
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn negotiate_skips_unsupported() {
        let locale = Locale::negotiate(Some("fr-FR,de;q=0.9,pt;q=0.1"), Locale::En);
        assert_eq!(locale, Locale::PtBr);
    }

    #[test]
    fn negotiate_falls_back() {
        assert_eq!(Locale::negotiate(None, Locale::PtBr), Locale::PtBr);
        assert_eq!(Locale::negotiate(Some("fr, de"), Locale::En), Locale::En);
        assert_eq!(Locale::negotiate(Some(""), Locale::PtBr), Locale::PtBr);
    }
}
