//! Sitemap generation with per-post freshness.
//!
//! Post `lastmod` values come from scanning the raw Markdown files, not from
//! the loaded collection, so the sitemap reflects what is on disk.
//!
//! # Scanner
//!
//! ```text
//! SitemapScanner::new ──► uninitialized
//!                              │ first state()/serialize()
//!                              ▼
//!                          building   (concurrent callers await the same scan)
//!                              │
//!                              ▼
//!                           ready     (never recomputed)
//! ```
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/posts/hello/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    content::{PostIndex, locale::logical_slug},
    i18n::Locales,
    log,
    utils::{
        date::{effective_date, format_ymd},
        frontmatter,
        url::Routes,
    },
};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_yaml_ng::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tokio::sync::OnceCell;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// URL segment that introduces a post slug.
const POSTS_SEGMENT: &str = "posts";

// ============================================================================
// Scanner
// ============================================================================

/// One sitemap record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapItem {
    pub url: String,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}

impl SitemapItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
        }
    }
}

/// Freshness data gathered from one scan of the content directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapState {
    /// Latest effective date per logical slug, `YYYY-MM-DD`
    pub lastmod_by_logical_slug: FxHashMap<String, String>,
    /// Latest effective date over all scanned posts
    pub latest_post_lastmod: Option<String>,
    /// Markdown files that contributed a date
    pub scanned: usize,
    /// Markdown files ignored (unreadable, no front matter, draft, no date)
    pub skipped: usize,
}

impl SitemapState {
    /// Keep the greatest date per slug and overall.
    ///
    /// `YYYY-MM-DD` strings are fixed width, so string order is date order.
    fn record(&mut self, logical_slug: &str, lastmod: String) {
        match self.lastmod_by_logical_slug.get_mut(logical_slug) {
            Some(existing) if *existing >= lastmod => {}
            Some(existing) => *existing = lastmod.clone(),
            None => {
                self.lastmod_by_logical_slug
                    .insert(logical_slug.to_owned(), lastmod.clone());
            }
        }
        if self.latest_post_lastmod.as_ref().is_none_or(|latest| lastmod > *latest) {
            self.latest_post_lastmod = Some(lastmod);
        }
        self.scanned += 1;
    }

    pub fn lastmod_for(&self, logical_slug: &str) -> Option<&str> {
        self.lastmod_by_logical_slug
            .get(logical_slug)
            .map(String::as_str)
    }

    /// Attach a `lastmod` to `item`.
    ///
    /// Post URLs get their own date; anything else, and posts the scan did
    /// not see, get the latest post date. Without any post the item is
    /// returned unchanged.
    pub fn apply(&self, item: SitemapItem, site: &str) -> SitemapItem {
        let lastmod = post_slug_from_url(&item.url, site)
            .and_then(|slug| self.lastmod_for(&slug))
            .or(self.latest_post_lastmod.as_deref());

        match lastmod {
            Some(lastmod) => SitemapItem {
                lastmod: Some(lastmod.to_owned()),
                ..item
            },
            None => item,
        }
    }
}

/// Lazily scans the posts directory once and decorates sitemap items.
#[derive(Debug)]
pub struct SitemapScanner {
    site: String,
    content_dir: PathBuf,
    locales: Locales,
    state: OnceCell<SitemapState>,
}

impl SitemapScanner {
    pub fn new(site: impl Into<String>, content_dir: impl Into<PathBuf>, locales: Locales) -> Self {
        Self {
            site: site.into(),
            content_dir: content_dir.into(),
            locales,
            state: OnceCell::new(),
        }
    }

    /// Scan result, built on first call.
    ///
    /// Fails only if the content directory itself cannot be read. A failed
    /// scan is not cached; the next call scans again.
    pub async fn state(&self) -> Result<&SitemapState> {
        self.state
            .get_or_try_init(|| build_state(&self.content_dir, &self.locales))
            .await
    }

    /// Attach the freshest known `lastmod` to `item`.
    pub async fn serialize(&self, item: SitemapItem) -> Result<SitemapItem> {
        let state = self.state().await?;
        Ok(state.apply(item, &self.site))
    }
}

/// Effective date of a post file, or `None` if it does not count.
fn effective_lastmod(content: &str) -> Option<String> {
    let raw = frontmatter::extract(content)?;
    let meta = frontmatter::parse_mapping(raw).ok()?;

    if meta.get("draft").and_then(Value::as_bool) == Some(true) {
        return None;
    }
    let published = meta.get("published").and_then(frontmatter::date_value)?;
    let updated = meta.get("updated").and_then(frontmatter::date_value);

    Some(format_ymd(&effective_date(&published, updated.as_ref())))
}

/// Slug of a post file: relative path without extension or trailing `/index`.
fn file_slug(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative = relative.to_string_lossy().replace('\\', "/");

    let without_ext = match relative.rsplit_once('.') {
        Some((stem, ext))
            if frontmatter::MARKDOWN_EXTENSIONS
                .iter()
                .any(|md| ext.eq_ignore_ascii_case(md)) =>
        {
            stem
        }
        _ => relative.as_str(),
    };
    without_ext
        .strip_suffix("/index")
        .unwrap_or(without_ext)
        .to_owned()
}

async fn read_dir(dir: &Path) -> std::io::Result<Vec<tokio::fs::DirEntry>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        entries.push(entry);
    }
    Ok(entries)
}

/// Walk `root` and collect the latest effective date per logical slug.
async fn build_state(root: &Path, locales: &Locales) -> Result<SitemapState> {
    let mut state = SitemapState::default();
    let mut pending = read_dir(root)
        .await
        .with_context(|| format!("Failed to read content directory {}", root.display()))?;

    while let Some(entry) = pending.pop() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type().await else {
            continue;
        };

        if file_type.is_dir() {
            match read_dir(&path).await {
                Ok(children) => pending.extend(children),
                Err(err) => log!("sitemap"; "skipping {}: {err}", path.display()),
            }
            continue;
        }

        let is_markdown = entry
            .file_name()
            .to_str()
            .is_some_and(frontmatter::is_markdown);
        if !file_type.is_file() || !is_markdown {
            continue;
        }

        let lastmod = match tokio::fs::read_to_string(&path).await {
            Ok(content) => effective_lastmod(&content),
            Err(_) => None,
        };
        match lastmod {
            Some(lastmod) => {
                let slug = file_slug(root, &path);
                state.record(logical_slug(&slug, locales), lastmod);
            }
            None => state.skipped += 1,
        }
    }

    Ok(state)
}

/// Path of an absolute or relative URL, without query or fragment.
fn path_of(url: &str) -> &str {
    let path = match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |idx| &rest[idx..]),
        None => url,
    };
    path.split(['?', '#']).next().unwrap_or_default()
}

/// Path component of `url`, resolving relative URLs against `site`.
fn url_pathname(url: &str, site: &str) -> String {
    let path = path_of(url);
    if path.starts_with('/') {
        return path.to_owned();
    }
    let base = path_of(site);
    let dir = base.rfind('/').map_or("/", |idx| &base[..=idx]);
    format!("{dir}{path}")
}

/// Decoded logical slug following the first `posts` segment of `url`.
fn post_slug_from_url(url: &str, site: &str) -> Option<String> {
    let pathname = url_pathname(url, site);
    let trimmed = pathname.strip_prefix('/').unwrap_or(&pathname);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    let parts: Vec<_> = trimmed.split('/').collect();
    let idx = parts.iter().position(|part| *part == POSTS_SEGMENT)?;
    let raw = parts[idx + 1..].join("/");

    Some(match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    })
}

// ============================================================================
// Sitemap Output
// ============================================================================

/// Every sitemap URL: static pages and posts in each supported locale.
pub fn sitemap_items(config: &SiteConfig, index: &PostIndex<'_>, routes: &Routes<'_>) -> Vec<SitemapItem> {
    let locales = index.locales();
    let mut items = Vec::new();

    for lang in locales.supported() {
        for page in &config.build.sitemap.pages {
            items.push(SitemapItem::new(routes.join_absolute(&routes.url(page, Some(lang.as_str())))));
        }
        for post in index.sorted_for_lang(lang) {
            let slug = encode_slug(index.logical_slug_of(post));
            let url = routes.post_url_by_slug(&slug, Some(lang.as_str()));
            items.push(SitemapItem::new(routes.absolute_site(&url)));
        }
    }

    items
}

/// Percent-encode each `/`-separated segment of a slug.
fn encode_slug(slug: &str) -> String {
    slug.split('/')
        .map(|segment| urlencoding::encode(segment))
        .collect::<Vec<_>>()
        .join("/")
}

/// Render the sitemap XML.
fn sitemap_xml(items: &[SitemapItem]) -> String {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for item in items {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&item.url)));
        if let Some(lastmod) = &item.lastmod {
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Write the sitemap file.
pub fn write_sitemap(path: &Path, items: &[SitemapItem]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, sitemap_xml(items))
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{} ({} urls)", path.display(), items.len());
    Ok(())
}

/// Build sitemap if enabled in config.
pub async fn build_sitemap(config: &SiteConfig, index: &PostIndex<'_>, routes: &Routes<'_>) -> Result<()> {
    if !config.build.sitemap.enable {
        log!("sitemap"; "disabled");
        return Ok(());
    }

    let scanner = SitemapScanner::new(routes.site(), config.posts_dir(), index.locales().clone());
    let state = scanner.state().await?;
    log!("sitemap"; "scanned {} posts, skipped {}", state.scanned, state.skipped);

    let mut items = Vec::new();
    for item in sitemap_items(config, index, routes) {
        items.push(scanner.serialize(item).await?);
    }

    write_sitemap(&config.sitemap_path(), &items)
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{
        fixtures::{locales, post},
        loader::load_posts,
    };
    use std::sync::Arc;
    use tempfile::TempDir;

    const SITE: &str = "https://example.com";

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn post_file(published: &str, updated: Option<&str>, draft: bool) -> String {
        let mut front = format!("---\ntitle: T\npublished: {published}\n");
        if let Some(updated) = updated {
            front.push_str(&format!("updated: {updated}\n"));
        }
        if draft {
            front.push_str("draft: true\n");
        }
        front.push_str("---\nBody\n");
        front
    }

    fn scanner(dir: &TempDir) -> SitemapScanner {
        SitemapScanner::new(SITE, dir.path(), locales())
    }

    async fn lastmod(scanner: &SitemapScanner, url: &str) -> Option<String> {
        scanner.serialize(SitemapItem::new(url)).await.unwrap().lastmod
    }

    #[test]
    fn test_effective_lastmod() {
        assert_eq!(
            effective_lastmod(&post_file("2024-01-10", None, false)).as_deref(),
            Some("2024-01-10")
        );
        assert_eq!(
            effective_lastmod(&post_file("2024-01-10", Some("2024-02-01"), false)).as_deref(),
            Some("2024-02-01")
        );
        assert_eq!(
            effective_lastmod(&post_file("2024-01-10", Some("2024-01-01"), false)).as_deref(),
            Some("2024-01-10")
        );
        assert_eq!(effective_lastmod(&post_file("2024-01-10", None, true)), None);
        assert_eq!(effective_lastmod("---\ntitle: T\n---\n"), None);
        assert_eq!(effective_lastmod("---\npublished: [oops\n---\n"), None);
        assert_eq!(effective_lastmod("no front matter"), None);
    }

    #[test]
    fn test_file_slug() {
        let root = Path::new("/c");
        assert_eq!(file_slug(root, Path::new("/c/en/hello.md")), "en/hello");
        assert_eq!(file_slug(root, Path::new("/c/vi/hello/index.mdx")), "vi/hello");
        assert_eq!(file_slug(root, Path::new("/c/a.MD")), "a");
        assert_eq!(file_slug(root, Path::new("/c/index.md")), "index");
    }

    #[test]
    fn test_post_slug_from_url() {
        let slug = |url: &str| post_slug_from_url(url, SITE);
        assert_eq!(slug("https://example.com/posts/hello/").as_deref(), Some("hello"));
        assert_eq!(slug("https://example.com/vi/posts/a/b/").as_deref(), Some("a/b"));
        assert_eq!(slug("/posts/xin%20ch%C3%A0o/").as_deref(), Some("xin chào"));
        assert_eq!(slug("https://example.com/posts/a/?x=1#top").as_deref(), Some("a"));
        assert_eq!(slug("https://example.com/posts/").as_deref(), Some(""));
        assert_eq!(slug("https://example.com/about/"), None);
    }

    #[test]
    fn test_url_pathname_relative() {
        assert_eq!(url_pathname("posts/a/", "https://example.com/blog/"), "/blog/posts/a/");
        assert_eq!(url_pathname("/posts/a/", "https://example.com/blog/"), "/posts/a/");
        assert_eq!(url_pathname("https://example.com", SITE), "/");
    }

    #[tokio::test]
    async fn test_max_effective_date_across_locales() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "en/a.md", &post_file("2024-01-10", None, false));
        write(dir.path(), "vi/a.md", &post_file("2024-01-05", Some("2024-03-01"), false));
        write(dir.path(), "b/index.md", &post_file("2024-02-01", None, false));

        let scanner = scanner(&dir);
        let state = scanner.state().await.unwrap();
        assert_eq!(state.lastmod_for("a"), Some("2024-03-01"));
        assert_eq!(state.lastmod_for("b"), Some("2024-02-01"));
        assert_eq!(state.latest_post_lastmod.as_deref(), Some("2024-03-01"));
        assert_eq!(state.scanned, 3);

        assert_eq!(lastmod(&scanner, "https://example.com/posts/a/").await.as_deref(), Some("2024-03-01"));
        assert_eq!(lastmod(&scanner, "https://example.com/vi/posts/b/").await.as_deref(), Some("2024-02-01"));
    }

    #[tokio::test]
    async fn test_updated_not_later_uses_published() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "en/a.md", &post_file("2024-01-10", Some("2024-01-01"), false));

        let scanner = scanner(&dir);
        assert_eq!(lastmod(&scanner, "/posts/a/").await.as_deref(), Some("2024-01-10"));
    }

    #[tokio::test]
    async fn test_drafts_and_invalid_files_excluded() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "en/live.md", &post_file("2024-01-01", None, false));
        write(dir.path(), "en/draft.md", &post_file("2024-06-01", None, true));
        write(dir.path(), "en/broken.md", "---\ntitle: [oops\n---\n");
        write(dir.path(), "en/undated.md", "---\ntitle: T\n---\n");
        write(dir.path(), "en/notes.txt", &post_file("2025-01-01", None, false));

        let scanner = scanner(&dir);
        let state = scanner.state().await.unwrap();
        assert_eq!(state.lastmod_for("draft"), None);
        assert_eq!(state.lastmod_for("broken"), None);
        assert_eq!(state.latest_post_lastmod.as_deref(), Some("2024-01-01"));
        assert_eq!(state.scanned, 1);
        assert_eq!(state.skipped, 3);

        // Draft post URL falls back to the latest post date.
        assert_eq!(lastmod(&scanner, "/posts/draft/").await.as_deref(), Some("2024-01-01"));
    }

    #[tokio::test]
    async fn test_non_post_url_gets_latest() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "en/a.md", &post_file("2024-01-10", None, false));
        write(dir.path(), "en/b.md", &post_file("2024-04-10", None, false));

        let scanner = scanner(&dir);
        assert_eq!(lastmod(&scanner, "https://example.com/about/").await.as_deref(), Some("2024-04-10"));
        assert_eq!(lastmod(&scanner, "https://example.com/").await.as_deref(), Some("2024-04-10"));
    }

    #[tokio::test]
    async fn test_empty_directory_passes_items_through() {
        let dir = TempDir::new().unwrap();
        let scanner = scanner(&dir);

        let item = SitemapItem {
            url: "https://example.com/about/".into(),
            lastmod: Some("2020-01-01".into()),
        };
        assert_eq!(scanner.serialize(item.clone()).await.unwrap(), item);

        let item = SitemapItem::new("https://example.com/posts/a/");
        assert_eq!(scanner.serialize(item.clone()).await.unwrap(), item);
    }

    #[tokio::test]
    async fn test_decoded_slug_lookup() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "vi/xin chào.md", &post_file("2024-05-05", None, false));
        write(dir.path(), "en/other.md", &post_file("2024-06-06", None, false));

        let scanner = scanner(&dir);
        assert_eq!(
            lastmod(&scanner, "https://example.com/vi/posts/xin%20ch%C3%A0o/").await.as_deref(),
            Some("2024-05-05")
        );
    }

    #[tokio::test]
    async fn test_missing_root_is_error_and_retried() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("posts");
        let scanner = SitemapScanner::new(SITE, &root, locales());

        assert!(scanner.serialize(SitemapItem::new("/posts/a/")).await.is_err());

        write(&root, "a.md", &post_file("2024-01-01", None, false));
        assert_eq!(lastmod(&scanner, "/posts/a/").await.as_deref(), Some("2024-01-01"));
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_scan() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "en/a.md", &post_file("2024-01-10", None, false));
        let scanner = Arc::new(scanner(&dir));

        let (first, second, item) = tokio::join!(
            scanner.state(),
            scanner.state(),
            scanner.serialize(SitemapItem::new("/posts/a/")),
        );
        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(std::ptr::eq(first, second));
        assert_eq!(item.unwrap().lastmod.as_deref(), Some("2024-01-10"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let scanner = Arc::clone(&scanner);
                tokio::spawn(async move {
                    let state = scanner.state().await.unwrap();
                    std::ptr::from_ref(state) as usize
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap(), std::ptr::from_ref(first) as usize);
        }
    }

    #[test]
    fn test_encode_slug() {
        assert_eq!(encode_slug("hello"), "hello");
        assert_eq!(encode_slug("series/part 1"), "series/part%201");
        assert_eq!(encode_slug("what?#now"), "what%3F%23now");
    }

    fn site_config(dir: &TempDir, extra: &str) -> SiteConfig {
        let mut config = SiteConfig::from_str(&format!(
            r#"
            [base]
            url = "https://example.com/"

            [i18n]
            locales = ["en", "vi"]
            default = "en"

            [build.sitemap]
            pages = ["/", "/about/"]
            {extra}
            "#
        ))
        .unwrap();
        config.build.content = dir.path().join("content");
        config.build.output = dir.path().join("dist");
        config
    }

    #[test]
    fn test_sitemap_items_encode_post_slugs() {
        let dir = TempDir::new().unwrap();
        let config = site_config(&dir, "");
        let locales = config.locales();
        let routes = Routes::from_config(&config, &locales).unwrap();
        let entries = [post("vi/xin chào & bạn?", "2024-01-01").build()];
        let index = PostIndex::new(&entries, &locales, config.build.mode);

        let urls: Vec<_> = sitemap_items(&config, &index, &routes)
            .into_iter()
            .map(|item| item.url)
            .collect();
        assert!(urls.contains(&"https://example.com/posts/xin%20ch%C3%A0o%20%26%20b%E1%BA%A1n%3F/".to_owned()));
        assert!(urls.contains(&"https://example.com/vi/posts/xin%20ch%C3%A0o%20%26%20b%E1%BA%A1n%3F/".to_owned()));
        assert!(urls.iter().all(|url| !url.contains(' ')));

        let xml = sitemap_xml(&sitemap_items(&config, &index, &routes));
        assert!(!xml.contains("&amp;"));
    }

    #[tokio::test]
    async fn test_encoded_post_url_finds_its_lastmod() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "vi/a & b?.md", &post_file("2024-05-05", None, false));
        write(dir.path(), "en/other.md", &post_file("2024-06-06", None, false));

        let scanner = scanner(&dir);
        let url = format!("https://example.com/vi/posts/{}/", encode_slug("a & b?"));
        assert_eq!(lastmod(&scanner, &url).await.as_deref(), Some("2024-05-05"));
    }

    #[tokio::test]
    async fn test_build_sitemap_writes_localized_urls() {
        let dir = TempDir::new().unwrap();
        let config = site_config(&dir, "");
        let posts = config.posts_dir();
        write(&posts, "en/a.md", &post_file("2024-01-10", None, false));
        write(&posts, "vi/a.md", &post_file("2024-01-05", Some("2024-03-01"), false));
        write(&posts, "en/b.md", &post_file("2024-02-01", None, false));

        let locales = config.locales();
        let routes = Routes::from_config(&config, &locales).unwrap();
        let entries = load_posts(&posts).unwrap();
        let index = PostIndex::new(&entries, &locales, config.build.mode);

        build_sitemap(&config, &index, &routes).await.unwrap();
        let xml = fs::read_to_string(config.sitemap_path()).unwrap();

        let entry = |loc: &str, lastmod: &str| {
            format!("    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n")
        };
        // Static pages once per locale, stamped with the latest post date.
        for loc in [
            "https://example.com/",
            "https://example.com/about/",
            "https://example.com/vi/",
            "https://example.com/vi/about/",
        ] {
            assert!(xml.contains(&entry(loc, "2024-03-01")), "{loc}");
        }
        // Posts carry their own freshest date across translations.
        assert!(xml.contains(&entry("https://example.com/posts/a/", "2024-03-01")));
        assert!(xml.contains(&entry("https://example.com/vi/posts/a/", "2024-03-01")));
        assert!(xml.contains(&entry("https://example.com/posts/b/", "2024-02-01")));
        // No Vietnamese translation of `b`; the fallback still gets a URL.
        assert!(xml.contains(&entry("https://example.com/vi/posts/b/", "2024-02-01")));
        assert_eq!(xml.matches("<url>").count(), 8);
    }

    #[tokio::test]
    async fn test_build_sitemap_disabled_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = site_config(&dir, "enable = false");
        write(&config.posts_dir(), "en/a.md", &post_file("2024-01-10", None, false));

        let locales = config.locales();
        let routes = Routes::from_config(&config, &locales).unwrap();
        let entries = load_posts(&config.posts_dir()).unwrap();
        let index = PostIndex::new(&entries, &locales, config.build.mode);

        build_sitemap(&config, &index, &routes).await.unwrap();
        assert!(!config.sitemap_path().exists());
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_xml() {
        let items = vec![
            SitemapItem {
                url: "https://example.com/posts/a/".into(),
                lastmod: Some("2025-01-01".into()),
            },
            SitemapItem::new("https://example.com/search?q=a&b=c"),
        ];
        let xml = sitemap_xml(&items);

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(lines[1], format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        assert_eq!(lines.last().copied(), Some("</urlset>"));
        assert!(xml.contains("<loc>https://example.com/posts/a/</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert_eq!(xml.matches("<lastmod>").count(), 1);
    }

    #[test]
    fn test_write_sitemap_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist/sitemap.xml");
        write_sitemap(&path, &[SitemapItem::new("https://example.com/")]).unwrap();

        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains("<loc>https://example.com/</loc>"));
    }
}
