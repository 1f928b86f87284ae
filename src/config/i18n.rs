//! `[i18n]` section configuration.

use super::defaults;
use crate::i18n::Locales;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[i18n]` section in glossa.toml - supported and default locales.
///
/// # Example
/// ```toml
/// [i18n]
/// locales = ["en", "vi"]
/// default = "en"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct I18nConfig {
    /// Supported locale codes. Order is kept for static alternates.
    #[serde(default = "defaults::i18n::locales")]
    #[educe(Default = defaults::i18n::locales())]
    pub locales: Vec<String>,

    /// Locale served without a URL prefix.
    #[serde(default = "defaults::i18n::default")]
    #[educe(Default = defaults::i18n::default())]
    pub default: String,
}

impl I18nConfig {
    pub fn locales(&self) -> Locales {
        Locales::new(self.locales.iter().cloned(), self.default.clone())
    }
}
