//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating `glossa.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Invalid config syntax")]
    Toml(#[from] toml::de::Error),

    #[error("`[i18n].locales` must list at least one locale")]
    NoLocales,

    #[error("Default locale `{default}` is not one of {supported:?}")]
    UnsupportedDefault { default: String, supported: Vec<String> },

    #[error("`{0}` is required for alternates and the sitemap")]
    MissingField(&'static str),
}
