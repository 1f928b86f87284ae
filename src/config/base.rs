//! `[base]` section configuration.
//!
//! Contains basic site information: title, description, origin URL and the
//! base path the site is deployed under.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in glossa.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// description = "Notes in two languages"
/// url = "https://myblog.com"
/// base_path = "/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title.
    #[serde(default)]
    pub title: String,

    /// Site description.
    #[serde(default)]
    pub description: String,

    /// Site origin for absolute links in alternates and the sitemap.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Path the site is served under (e.g. "/blog/").
    #[serde(default = "defaults::base::base_path")]
    #[educe(Default = defaults::base::base_path())]
    pub base_path: String,
}
