//! Tag and category indexes over a per-locale post list.
//!
//! # Category tree
//!
//! Category paths are `/`-separated. A post in `tech/rust` counts once toward
//! `tech` and once toward `tech/rust`:
//!
//! ```text
//! post 1: tech/rust        tech (2)
//! post 2: tech/web    ──►  ├── rust (1)
//! post 3: (none)           └── web (1)
//!                          Uncategorized (1)
//! ```

use super::{entry::CategoryField, posts::PostIndex};
use crate::{
    i18n::{I18nKey, i18n},
    utils::url::Routes,
};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// A tag and the number of posts using it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub count: usize,
}

/// A node of the category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Last path segment
    pub name: String,
    /// Posts in this category or any descendant
    pub count: usize,
    pub url: String,
    pub children: Vec<Category>,
}

/// Case-insensitive name order, raw name as tie-break.
fn by_name(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Tag occurrence counts for the `lang` post list, sorted by name.
///
/// `None` uses the default locale.
pub fn tag_list(index: &PostIndex<'_>, lang: Option<&str>) -> Vec<Tag> {
    let lang = lang.unwrap_or_else(|| index.locales().default_locale());

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for post in index.sorted_for_lang(lang) {
        for tag in &post.data.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut tags: Vec<_> = counts
        .into_iter()
        .map(|(name, count)| Tag {
            name: name.to_owned(),
            count,
        })
        .collect();
    tags.sort_by(|a, b| by_name(&a.name, &b.name));
    tags
}

/// Trimmed, non-empty category paths of a post, in declaration order.
pub fn normalize_category_list(field: Option<&CategoryField>) -> Vec<String> {
    let values: &[String] = match field {
        Some(CategoryField::One(value)) => std::slice::from_ref(value),
        Some(CategoryField::Many(values)) => values,
        None => &[],
    };
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect()
}

/// First declared category path, if any.
pub fn primary_category(field: Option<&CategoryField>) -> Option<String> {
    normalize_category_list(field).into_iter().next()
}

/// Flat node storage; the tree is assembled once counting is done.
struct Node {
    name: String,
    count: usize,
    url: String,
    children: Vec<usize>,
}

/// Hierarchical category tree for the `lang` post list.
///
/// Posts without a category are filed under the localized "uncategorized"
/// label. `None` uses the default locale.
pub fn category_list(index: &PostIndex<'_>, routes: &Routes<'_>, lang: Option<&str>) -> Vec<Category> {
    let locales = index.locales();
    let uncategorized = i18n(I18nKey::Uncategorized, lang, locales);
    let posts = index.sorted_for_lang(lang.unwrap_or_else(|| locales.default_locale()));

    let mut nodes: Vec<Node> = Vec::new();
    let mut by_path: FxHashMap<String, usize> = FxHashMap::default();
    let mut roots: Vec<usize> = Vec::new();

    for post in posts {
        let mut categories = normalize_category_list(post.data.category.as_ref());
        if categories.is_empty() {
            categories.push(uncategorized.to_owned());
        }

        let mut seen = FxHashSet::default();
        for category in categories.iter().filter(|c| seen.insert(c.as_str())) {
            let mut path = String::new();
            let mut parent: Option<usize> = None;

            for part in category.split('/').map(str::trim).filter(|p| !p.is_empty()) {
                if !path.is_empty() {
                    path.push('/');
                }
                path.push_str(part);

                let id = match by_path.get(&path) {
                    Some(&id) => id,
                    None => {
                        let id = nodes.len();
                        let target = (path != uncategorized).then_some(path.as_str());
                        nodes.push(Node {
                            name: part.to_owned(),
                            count: 0,
                            url: routes.category_url(target, lang),
                            children: Vec::new(),
                        });
                        by_path.insert(path.clone(), id);
                        match parent {
                            Some(parent) => nodes[parent].children.push(id),
                            None => roots.push(id),
                        }
                        id
                    }
                };
                nodes[id].count += 1;
                parent = Some(id);
            }
        }
    }

    build_tree(&nodes, &roots)
}

fn build_tree(nodes: &[Node], ids: &[usize]) -> Vec<Category> {
    let mut categories: Vec<_> = ids
        .iter()
        .map(|&id| {
            let node = &nodes[id];
            Category {
                name: node.name.clone(),
                count: node.count,
                url: node.url.clone(),
                children: build_tree(nodes, &node.children),
            }
        })
        .collect();
    categories.sort_by(|a, b| by_name(&a.name, &b.name));
    categories
}
