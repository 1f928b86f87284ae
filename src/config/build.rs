//! `[build]` section configuration.
//!
//! Contains content paths, output location, build mode and sitemap settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// Build mode supplied by the host build.
///
/// Draft posts are hidden from every index in production and visible in
/// development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Production,
    Development,
}

impl BuildMode {
    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in glossa.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "src/content"  # Content root
/// posts = "posts"          # Posts collection, also scanned for sitemap lastmod
/// output = "dist"
/// mode = "production"
///
/// [build.sitemap]
/// pages = ["/", "/archive/", "/about/"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content root directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// `posts` collection directory, relative to `content`.
    #[serde(default = "defaults::build::posts")]
    #[educe(Default = defaults::build::posts())]
    pub posts: PathBuf,

    /// `spec` collection directory, relative to `content`.
    #[serde(default = "defaults::build::spec")]
    #[educe(Default = defaults::build::spec())]
    pub spec: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Production hides drafts; development shows them.
    #[serde(default)]
    pub mode: BuildMode,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.sitemap]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Write the sitemap in `glossa sitemap`.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output file, relative to `output`.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,

    /// Static pages listed for every locale.
    #[serde(default = "defaults::build::sitemap::pages")]
    #[educe(Default = defaults::build::sitemap::pages())]
    pub pages: Vec<String>,
}
