//! Collection entry types.
//!
//! These mirror what the content loader hands over: a stable `id`, an optional
//! `slug`, and the typed front matter of a post. The core only reads them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Anything that can be assigned a locale and a logical slug.
///
/// Implemented by both collections (`posts` and `spec`) so the locale resolver
/// and the localized matcher work on either.
pub trait LocalizedEntry {
    /// Stable identifier (usually the path relative to the collection root).
    fn id(&self) -> &str;

    /// Optional slug; preferred over [`LocalizedEntry::id`] when non-empty.
    fn slug(&self) -> Option<&str>;

    /// Locale declared in front matter.
    fn declared_lang(&self) -> Option<&str>;

    /// The path used for locale detection: slug when present, id otherwise.
    fn path(&self) -> &str {
        self.slug().filter(|s| !s.is_empty()).unwrap_or_else(|| self.id())
    }
}

/// The `category` front matter field: one path or a list of paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    One(String),
    Many(Vec<String>),
}

/// Front matter of a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostData {
    pub title: String,
    pub published: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl PostData {
    /// Minimal front matter: a title and a publication date.
    pub fn new(title: impl Into<String>, published: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            published,
            updated: None,
            draft: false,
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            category: None,
            lang: None,
        }
    }
}

/// One entry of the `posts` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub data: PostData,
}

impl ContentEntry {
    pub fn new(id: impl Into<String>, data: PostData) -> Self {
        Self {
            id: id.into(),
            slug: None,
            data,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

impl LocalizedEntry for ContentEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn declared_lang(&self) -> Option<&str> {
        self.data.lang.as_deref()
    }
}
