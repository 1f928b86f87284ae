//! Site configuration management for `glossa.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site metadata (title, origin url, base path)     |
//! | `[i18n]`    | Supported locales and the default locale         |
//! | `[build]`   | Content paths, output, build mode, sitemap       |
//! | `[extra]`   | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! url = "https://example.com"
//!
//! [i18n]
//! locales = ["en", "vi"]
//! default = "en"
//!
//! [build]
//! content = "src/content"
//! mode = "production"
//!
//! [build.sitemap]
//! pages = ["/", "/archive/", "/about/"]
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod i18n;

pub use build::BuildMode;
pub use error::ConfigError;

use base::BaseConfig;
use build::BuildConfig;
use i18n::I18nConfig;

use crate::{cli::Cli, i18n::Locales};
use anyhow::{Context, Result};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing glossa.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Locale settings
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Locale settings as a [`Locales`] value.
    pub fn locales(&self) -> Locales {
        self.i18n.locales()
    }

    /// Directory of the `posts` collection.
    pub fn posts_dir(&self) -> PathBuf {
        self.build.content.join(&self.build.posts)
    }

    /// Directory of the `spec` collection.
    pub fn spec_dir(&self) -> PathBuf {
        self.build.content.join(&self.build.spec)
    }

    /// Output path of the sitemap file.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Site origin. Presence is checked by [`SiteConfig::validate`].
    pub fn site_url(&self) -> Result<&str> {
        self.base
            .url
            .as_deref()
            .context("`[base].url` is required")
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        if let Some(url) = &cli.base_url {
            self.base.url = Some(url.clone());
        }
        if cli.dev {
            self.build.mode = BuildMode::Development;
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(&Self::expand_tilde(root));
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_name));
        self.build.content = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.content)));
        self.build.output = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.output)));
    }

    /// Expand a leading `~` to the home directory.
    fn expand_tilde(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path.to_path_buf(),
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate locale settings and required fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i18n.locales.is_empty() {
            return Err(ConfigError::NoLocales);
        }

        if !self.i18n.locales.iter().any(|l| *l == self.i18n.default) {
            return Err(ConfigError::UnsupportedDefault {
                default: self.i18n.default.clone(),
                supported: self.i18n.locales.clone(),
            });
        }

        match self.base.url.as_deref() {
            None | Some("") => Err(ConfigError::MissingField("[base].url")),
            Some(_) => Ok(()),
        }
    }
}
