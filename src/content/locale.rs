//! Locale detection and localized entry matching.
//!
//! # Locale of an entry
//!
//! | Priority | Source                                    | Example                |
//! |----------|-------------------------------------------|------------------------|
//! | 1        | `lang` in front matter                    | `lang: vi` → `vi`      |
//! | 2        | first path segment, if a supported locale | `vi/hello` → `vi`      |
//! | 3        | default locale                            | `hello` → `en`         |
//!
//! A declared `lang` that matches a supported locale case-insensitively is
//! returned in the configured casing (`lang: VI` → `vi`), so lookups by
//! locale agree with the config. Unknown values are returned as written.
//!
//! The logical slug only looks at the path: `vi/hello` → `hello`. An entry
//! that declares `lang: vi` but lives at `hello` keeps `hello` as its logical
//! slug and is still detected as `vi`.

use super::entry::LocalizedEntry;
use crate::i18n::Locales;

/// Split `path` into its locale segment and the rest.
///
/// Only paths with more than one segment can carry a locale prefix.
fn split_locale<'a>(path: &'a str, locales: &'a Locales) -> Option<(&'a str, &'a str)> {
    let (first, rest) = path.split_once('/')?;
    locales.match_segment(first).map(|locale| (locale, rest))
}

/// Locale of a content entry. Never empty.
pub fn entry_lang<'a, E: LocalizedEntry + ?Sized>(entry: &'a E, locales: &'a Locales) -> &'a str {
    if let Some(lang) = entry.declared_lang().filter(|l| !l.is_empty()) {
        return locales.match_segment(lang).unwrap_or(lang);
    }

    split_locale(entry.path(), locales)
        .map(|(locale, _)| locale)
        .unwrap_or_else(|| locales.default_locale())
}

/// Locale-independent identifier of a content entry.
pub fn entry_logical_slug<'a, E: LocalizedEntry + ?Sized>(entry: &'a E, locales: &Locales) -> &'a str {
    logical_slug(entry.path(), locales)
}

/// Strip a leading locale segment from a slug-like path.
pub fn logical_slug<'a>(path: &'a str, locales: &Locales) -> &'a str {
    match path.split_once('/') {
        Some((first, rest)) if locales.match_segment(first).is_some() => rest,
        _ => path,
    }
}

/// Pick the best entry for `logical_slug` in `lang`.
///
/// 1. exact locale match
/// 2. default locale
/// 3. any locale, first in input order
///
/// Returns `None` only if no entry has this logical slug.
pub fn resolve_localized<'a, E, I>(
    items: I,
    logical_slug: &str,
    lang: &str,
    locales: &Locales,
) -> Option<&'a E>
where
    E: LocalizedEntry + ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
    I::IntoIter: Clone,
{
    let items = items.into_iter();
    let has_slug = |item: &&'a E| entry_logical_slug(*item, locales) == logical_slug;

    items
        .clone()
        .find(|item| has_slug(item) && entry_lang(*item, locales) == lang)
        .or_else(|| {
            items.clone().find(|item| {
                has_slug(item) && entry_lang(*item, locales) == locales.default_locale()
            })
        })
        .or_else(|| items.clone().find(has_slug))
}
