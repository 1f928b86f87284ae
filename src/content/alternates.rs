//! `hreflang` alternate links.
//!
//! Every list ends with exactly one `x-default` entry pointing at the
//! default-locale URL. That URL is not checked against the collection: a
//! post that only exists in a non-default locale still gets an `x-default`
//! pointing at the unprefixed route.

use super::posts::PostIndex;
use crate::{i18n::language_tag, utils::url::Routes};
use serde::Serialize;

/// Language tag of the catch-all alternate.
pub const X_DEFAULT: &str = "x-default";

/// One `<link rel="alternate" hreflang=… href=…>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub lang: String,
    pub href: String,
}

/// Alternates for every existing localization of a post.
///
/// Variants are found by logical-slug equality over the raw sorted list,
/// so their order follows publication date.
pub fn post_alternates(index: &PostIndex<'_>, routes: &Routes<'_>, logical_slug: &str) -> Vec<Alternate> {
    let default = index.locales().default_locale();

    index
        .raw_sorted()
        .iter()
        .filter(|post| index.logical_slug_of(post) == logical_slug)
        .map(|post| {
            let lang = index.lang_of(post);
            Alternate {
                lang: lang.to_owned(),
                href: routes.absolute_site(&routes.post_url_by_slug(logical_slug, Some(lang))),
            }
        })
        .chain(std::iter::once(Alternate {
            lang: X_DEFAULT.to_owned(),
            href: routes.absolute_site(&routes.post_url_by_slug(logical_slug, Some(default))),
        }))
        .collect()
}

/// Alternates for a static page in every supported locale.
pub fn static_alternates(routes: &Routes<'_>, path: &str) -> Vec<Alternate> {
    let locales = routes.locales();

    locales
        .supported()
        .iter()
        .map(|lang| Alternate {
            lang: language_tag(lang),
            href: routes.join_absolute(&routes.url(path, Some(lang))),
        })
        .chain(std::iter::once(Alternate {
            lang: X_DEFAULT.to_owned(),
            href: routes.join_absolute(&routes.url(path, Some(locales.default_locale()))),
        }))
        .collect()
}
