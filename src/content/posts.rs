//! Per-locale post indexes.
//!
//! # Pipeline
//!
//! ```text
//! entries ──► PostIndex::new ──► raw sorted (drafts dropped in production)
//!                                    │
//!                                    ├── sorted_for_lang(lang)
//!                                    │      one entry per logical slug,
//!                                    │      best localization for `lang`
//!                                    │
//!                                    ├── prev_next_map_for_lang(lang)
//!                                    ├── taxonomy::{tag_list, category_list}
//!                                    └── alternates::post_alternates
//! ```
//!
//! Posts are ordered newest first. Equal publication dates are ordered by
//! `id` so output is reproducible across builds.

use super::{
    entry::{ContentEntry, LocalizedEntry, PostData},
    locale::{entry_lang, entry_logical_slug, resolve_localized},
    navigation::{self, PrevNextPost},
};
use crate::{config::BuildMode, i18n::Locales};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::{cmp::Ordering, collections::BTreeMap};

/// Read-only list projection of a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostForList<'a> {
    /// Logical slug
    pub slug: &'a str,
    pub data: &'a PostData,
    pub lang: &'a str,
}

/// A post paired with its whole-collection neighbours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigatedPost<'a> {
    pub entry: &'a ContentEntry,
    pub nav: PrevNextPost,
}

/// Newest first, then by id.
fn compare_published(a: &ContentEntry, b: &ContentEntry) -> Ordering {
    b.data
        .published
        .cmp(&a.data.published)
        .then_with(|| a.id.cmp(&b.id))
}

/// Date-sorted view over the `posts` collection.
#[derive(Debug, Clone)]
pub struct PostIndex<'a> {
    locales: &'a Locales,
    posts: Vec<&'a ContentEntry>,
}

impl<'a> PostIndex<'a> {
    /// Build the raw sorted list: drafts dropped in production, newest first.
    pub fn new(entries: &'a [ContentEntry], locales: &'a Locales, mode: BuildMode) -> Self {
        let mut posts: Vec<_> = entries
            .iter()
            .filter(|entry| !(mode.is_production() && entry.data.draft))
            .collect();
        posts.sort_by(|a, b| compare_published(a, b));
        Self { locales, posts }
    }

    pub fn locales(&self) -> &'a Locales {
        self.locales
    }

    /// Every visible post across all locales, newest first.
    pub fn raw_sorted(&self) -> &[&'a ContentEntry] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Locale of `entry` under this index's locale settings.
    pub fn lang_of<'e>(&self, entry: &'e ContentEntry) -> &'e str
    where
        'a: 'e,
    {
        entry_lang(entry, self.locales)
    }

    /// Logical slug of `entry` under this index's locale settings.
    pub fn logical_slug_of<'e>(&self, entry: &'e ContentEntry) -> &'e str {
        entry_logical_slug(entry, self.locales)
    }

    /// Best available localization of `logical_slug` for `lang`.
    pub fn post_for_lang(&self, logical_slug: &str, lang: &str) -> Option<&'a ContentEntry> {
        resolve_localized(self.posts.iter().copied(), logical_slug, lang, self.locales)
    }

    /// One post per logical slug, each in its best localization for `lang`.
    pub fn sorted_for_lang(&self, lang: &str) -> Vec<&'a ContentEntry> {
        let mut seen = FxHashSet::default();
        let mut resolved: Vec<_> = self
            .posts
            .iter()
            .map(|post| self.logical_slug_of(post))
            .filter(|slug| seen.insert(*slug))
            .filter_map(|slug| self.post_for_lang(slug, lang))
            .collect();
        resolved.sort_by(|a, b| compare_published(a, b));
        resolved
    }

    /// [`PostIndex::sorted_for_lang`] as list projections.
    pub fn list_for_lang(&self, lang: &str) -> Vec<PostForList<'a>> {
        self.sorted_for_lang(lang)
            .into_iter()
            .map(|post| self.project(post))
            .collect()
    }

    /// Every visible post, all locale variants included, as list projections.
    pub fn list(&self) -> Vec<PostForList<'a>> {
        self.posts.iter().copied().map(|post| self.project(post)).collect()
    }

    fn project(&self, post: &'a ContentEntry) -> PostForList<'a> {
        PostForList {
            slug: self.logical_slug_of(post),
            data: &post.data,
            lang: self.lang_of(post),
        }
    }

    /// Prev/next links keyed by logical slug for the `lang` post list.
    pub fn prev_next_map_for_lang(&self, lang: &str) -> BTreeMap<String, PrevNextPost> {
        let posts = self.sorted_for_lang(lang);
        navigation::link(&posts, |post| self.logical_slug_of(post))
            .into_iter()
            .zip(posts.iter().copied())
            .map(|(nav, post)| (self.logical_slug_of(post).to_owned(), nav))
            .collect()
    }

    /// Whole-collection navigation over the raw sorted list.
    ///
    /// Links use each entry's concrete path (slug or id), not the logical slug.
    pub fn sorted_with_navigation(&self) -> Vec<NavigatedPost<'a>> {
        navigation::link(&self.posts, |post| post.path())
            .into_iter()
            .zip(self.posts.iter().copied())
            .map(|(nav, entry)| NavigatedPost { entry, nav })
            .collect()
    }

    /// Find a post from a `/posts/<slug>/` URL path.
    ///
    /// Matches the entry's concrete path or its logical slug.
    pub fn post_by_url(&self, url: &str) -> Option<&'a ContentEntry> {
        let rest = url.strip_prefix("/posts/")?;
        let slug = rest.strip_suffix('/').unwrap_or(rest);

        self.posts.iter().copied().find(|post| {
            let path = post.path();
            path == slug
                || self.logical_slug_of(post) == slug
                || slug.strip_suffix('/') == Some(path)
        })
    }
}
