//! The `spec` collection: standalone pages such as "about".

use super::{entry::LocalizedEntry, locale::resolve_localized};
use crate::i18n::Locales;
use serde::Serialize;

/// One standalone page. No front matter fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Markdown body without front matter
    pub body: String,
}

impl LocalizedEntry for SpecEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn declared_lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}

/// Best localization of the page `logical_slug` for `lang`.
pub fn spec_for_lang<'a>(
    entries: &'a [SpecEntry],
    logical_slug: &str,
    lang: &str,
    locales: &Locales,
) -> Option<&'a SpecEntry> {
    resolve_localized(entries, logical_slug, lang, locales)
}
