//! Site URL rules.
//!
//! # Architecture
//!
//! ```text
//! SiteConfig + Locales
//!     │
//!     └── Routes::from_config
//!            │
//!            ├── url(path, lang)              → /base/{lang}/path
//!            ├── post_url_by_slug(slug, lang) → /base/{lang}/posts/{logical}/
//!            ├── tag_url(tag, lang)           → /base/{lang}/archive/?tag=…
//!            ├── category_url(cat, lang)      → /base/{lang}/archive/?category=…
//!            └── absolute_site(url)           → https://site/base/…
//! ```
//!
//! The locale prefix is omitted for the default locale.

use crate::{
    config::SiteConfig,
    i18n::{I18nKey, Locales, i18n},
};
use anyhow::Result;

/// URL builder bound to one site's locale and path settings.
#[derive(Debug, Clone, Copy)]
pub struct Routes<'a> {
    locales: &'a Locales,
    /// Base path for subdirectory deployment, e.g. `/` or `/blog/`
    base_path: &'a str,
    /// Site origin, e.g. `https://example.com`
    site: &'a str,
}

impl<'a> Routes<'a> {
    #[inline]
    pub const fn new(locales: &'a Locales, base_path: &'a str, site: &'a str) -> Self {
        Self {
            locales,
            base_path,
            site,
        }
    }

    /// Build from a loaded config. Fails without `[base].url`.
    pub fn from_config(config: &'a SiteConfig, locales: &'a Locales) -> Result<Self> {
        Ok(Self::new(locales, &config.base.base_path, config.site_url()?))
    }

    #[inline]
    pub const fn locales(&self) -> &'a Locales {
        self.locales
    }

    /// Site origin without a trailing slash.
    pub fn site(&self) -> &'a str {
        self.site.trim_end_matches('/')
    }

    /// Site-relative URL for `path` in `lang`.
    ///
    /// ```ignore
    /// // base "/", default "en"
    /// routes.url("/about/", Some("vi")) → "/vi/about/"
    /// routes.url("/about/", Some("en")) → "/about/"
    /// routes.url("/about/", None)       → "/about/"
    /// ```
    pub fn url(&self, path: &str, lang: Option<&str>) -> String {
        let prefix = match lang {
            Some(lang) if !lang.is_empty() && !self.locales.is_default(lang) => {
                format!("/{lang}")
            }
            _ => String::new(),
        };
        join_url(&["", self.base_path, &format!("{prefix}{path}")])
    }

    /// URL of a post.
    ///
    /// A locale prefix in `slug` is stripped and, without an explicit
    /// `lang`, picks the locale: `vi/hello` → `/vi/posts/hello/`.
    pub fn post_url_by_slug(&self, slug: &str, lang: Option<&str>) -> String {
        let (logical, lang) = match slug.split_once('/') {
            Some((first, rest)) => match self.locales.match_segment(first) {
                Some(locale) => (rest, lang.or(Some(locale))),
                None => (slug, lang),
            },
            None => (slug, lang),
        };
        self.url(&format!("/posts/{logical}/"), lang)
    }

    /// Archive URL filtered by tag. An empty tag links to the full archive.
    pub fn tag_url(&self, tag: &str, lang: Option<&str>) -> String {
        if tag.is_empty() {
            return self.url("/archive/", lang);
        }
        let tag = urlencoding::encode(tag.trim());
        self.url(&format!("/archive/?tag={tag}"), lang)
    }

    /// Archive URL filtered by category.
    ///
    /// `None`, blank, or the localized "uncategorized" label link to the
    /// uncategorized filter.
    pub fn category_url(&self, category: Option<&str>, lang: Option<&str>) -> String {
        let uncategorized = i18n(I18nKey::Uncategorized, lang, self.locales);
        match category.map(str::trim) {
            Some(category)
                if !category.is_empty()
                    && category.to_lowercase() != uncategorized.to_lowercase() =>
            {
                let category = urlencoding::encode(category);
                self.url(&format!("/archive/?category={category}"), lang)
            }
            _ => self.url("/archive/?uncategorized=true", lang),
        }
    }

    /// Prefix a site-relative URL with the site origin.
    pub fn absolute_site(&self, url: &str) -> String {
        format!("{}{url}", self.site())
    }

    /// Join the site origin and a site-relative URL with exactly one `/`.
    pub fn join_absolute(&self, url: &str) -> String {
        format!("{}/{}", self.site(), url.strip_prefix('/').unwrap_or(url))
    }
}

/// Join URL parts with `/`, collapsing repeated slashes.
fn join_url(parts: &[&str]) -> String {
    let joined = parts.join("/");
    let mut out = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Compare two URL paths ignoring one leading/trailing slash and case.
pub fn paths_equal(a: &str, b: &str) -> bool {
    fn normalize(path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);
        path.to_lowercase()
    }
    normalize(a) == normalize(b)
}

/// Directory part of a path, with trailing slash. `/` if there is none.
pub fn get_dir(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.rfind('/') {
        Some(idx) => normalized[..=idx].to_owned(),
        None => "/".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Locales {
        Locales::new(["en", "vi"], "en")
    }

    #[test]
    fn test_url_locale_prefix() {
        let locales = locales();
        let routes = Routes::new(&locales, "/", "https://example.com");
        assert_eq!(routes.url("/about/", Some("vi")), "/vi/about/");
        assert_eq!(routes.url("/about/", Some("en")), "/about/");
        assert_eq!(routes.url("/about/", Some("")), "/about/");
        assert_eq!(routes.url("/about/", None), "/about/");
    }

    #[test]
    fn test_url_with_base_path() {
        let locales = locales();
        let routes = Routes::new(&locales, "/blog/", "https://example.com");
        assert_eq!(routes.url("/about/", Some("vi")), "/blog/vi/about/");
        assert_eq!(routes.url("/", None), "/blog/");

        let routes = Routes::new(&locales, "blog", "https://example.com");
        assert_eq!(routes.url("/archive/", None), "/blog/archive/");
    }

    #[test]
    fn test_post_url_by_slug() {
        let locales = locales();
        let routes = Routes::new(&locales, "/", "https://example.com");
        assert_eq!(routes.post_url_by_slug("hello", None), "/posts/hello/");
        assert_eq!(routes.post_url_by_slug("hello", Some("vi")), "/vi/posts/hello/");
        assert_eq!(routes.post_url_by_slug("vi/hello", None), "/vi/posts/hello/");
        assert_eq!(routes.post_url_by_slug("vi/hello", Some("en")), "/posts/hello/");
        assert_eq!(routes.post_url_by_slug("VI/a/b", None), "/vi/posts/a/b/");
        // A bare locale code is a slug, not a prefix.
        assert_eq!(routes.post_url_by_slug("vi", None), "/posts/vi/");
    }

    #[test]
    fn test_tag_url() {
        let locales = locales();
        let routes = Routes::new(&locales, "/", "https://example.com");
        assert_eq!(routes.tag_url("", None), "/archive/");
        assert_eq!(routes.tag_url(" rust ", None), "/archive/?tag=rust");
        assert_eq!(routes.tag_url("a b/c", Some("vi")), "/vi/archive/?tag=a%20b%2Fc");
    }

    #[test]
    fn test_category_url() {
        let locales = locales();
        let routes = Routes::new(&locales, "/", "https://example.com");
        assert_eq!(routes.category_url(Some("tech/rust"), None), "/archive/?category=tech%2Frust");
        assert_eq!(routes.category_url(None, None), "/archive/?uncategorized=true");
        assert_eq!(routes.category_url(Some("  "), None), "/archive/?uncategorized=true");
        assert_eq!(
            routes.category_url(Some("uncategorized"), None),
            "/archive/?uncategorized=true"
        );
        assert_eq!(
            routes.category_url(Some("Chưa phân loại"), Some("vi")),
            "/vi/archive/?uncategorized=true"
        );
    }

    #[test]
    fn test_absolute_urls() {
        let locales = locales();
        let routes = Routes::new(&locales, "/", "https://example.com/");
        assert_eq!(routes.site(), "https://example.com");
        assert_eq!(routes.absolute_site("/posts/a/"), "https://example.com/posts/a/");
        assert_eq!(routes.join_absolute("/vi/about/"), "https://example.com/vi/about/");
        assert_eq!(routes.join_absolute("about/"), "https://example.com/about/");
    }

    #[test]
    fn test_paths_equal() {
        assert!(paths_equal("/About/", "about"));
        assert!(paths_equal("/posts/a", "posts/a/"));
        assert!(!paths_equal("/posts/a", "/posts/b"));
    }

    #[test]
    fn test_get_dir() {
        assert_eq!(get_dir("posts/a/index.md"), "posts/a/");
        assert_eq!(get_dir("posts\\a\\index.md"), "posts/a/");
        assert_eq!(get_dir("index.md"), "/");
    }
}
