//! Locale configuration and translation lookup.
//!
//! [`Locales`] is the single source of truth for which language codes the
//! site supports and which one is the default. Everything that has to decide
//! "which locale does this belong to" goes through it, so every resolution
//! path ends in a locale.

mod translation;

pub use translation::{I18nKey, i18n};

/// Supported locale codes plus the distinguished default locale.
///
/// # Example
///
/// ```ignore
/// let locales = Locales::new(["en", "vi"], "en");
/// assert_eq!(locales.match_segment("VI"), Some("vi"));
/// assert!(locales.is_default("en"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locales {
    supported: Vec<String>,
    default: String,
}

impl Locales {
    pub fn new<I, S>(supported: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported: supported.into_iter().map(Into::into).collect(),
            default: default.into(),
        }
    }

    /// The configured default locale.
    #[inline]
    pub fn default_locale(&self) -> &str {
        &self.default
    }

    /// All supported locale codes, in configuration order.
    #[inline]
    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    /// Returns true if `lang` is the default locale (exact match).
    #[inline]
    pub fn is_default(&self, lang: &str) -> bool {
        lang == self.default
    }

    /// Find the supported locale matching `segment`, ignoring ASCII case.
    ///
    /// The returned code uses the casing from the supported list.
    pub fn match_segment(&self, segment: &str) -> Option<&str> {
        self.supported
            .iter()
            .find(|locale| locale.eq_ignore_ascii_case(segment))
            .map(String::as_str)
    }
}

/// Normalize a locale code into a hyphenated language tag.
///
/// `en` → `en`, `en_us` → `en-US`, `ZH-hans` → `zh-HANS`.
pub fn language_tag(lang: &str) -> String {
    let normalized = lang.replacen('_', "-", 1).to_lowercase();
    let mut parts = normalized.split('-');
    let language = parts.next().unwrap_or_default();
    match parts.next() {
        Some(region) if !region.is_empty() => format!("{language}-{}", region.to_uppercase()),
        _ => language.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segment_case_insensitive() {
        let locales = Locales::new(["en", "vi"], "en");
        assert_eq!(locales.match_segment("en"), Some("en"));
        assert_eq!(locales.match_segment("VI"), Some("vi"));
        assert_eq!(locales.match_segment("fr"), None);
        assert_eq!(locales.match_segment(""), None);
    }

    #[test]
    fn test_match_segment_keeps_configured_casing() {
        let locales = Locales::new(["pt-BR"], "pt-BR");
        assert_eq!(locales.match_segment("pt-br"), Some("pt-BR"));
    }

    #[test]
    fn test_is_default() {
        let locales = Locales::new(["en", "vi"], "en");
        assert!(locales.is_default("en"));
        assert!(!locales.is_default("vi"));
        assert!(!locales.is_default("EN"));
    }

    #[test]
    fn test_language_tag() {
        assert_eq!(language_tag("en"), "en");
        assert_eq!(language_tag("en_us"), "en-US");
        assert_eq!(language_tag("en-us"), "en-US");
        assert_eq!(language_tag("VI"), "vi");
        assert_eq!(language_tag("zh_Hans"), "zh-HANS");
    }
}
