//! Prev/next links over a date-descending post list.
//!
//! For `[p0, p1, ..., pn]` (p0 newest), post `i` links to:
//! - `next` = `p(i-1)`, the newer neighbour
//! - `prev` = `p(i+1)`, the older neighbour

use super::entry::ContentEntry;
use serde::Serialize;

/// Neighbour links for one post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrevNextPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_title: Option<String>,
}

/// Compute neighbour links for each post, in input order.
///
/// `key` picks the identifier written into the links.
pub fn link<'a, F>(posts: &[&'a ContentEntry], key: F) -> Vec<PrevNextPost>
where
    F: Fn(&'a ContentEntry) -> &'a str,
{
    let neighbour = |post: Option<&&'a ContentEntry>| {
        post.map(|&p| (key(p).to_owned(), p.data.title.clone()))
            .unzip()
    };

    (0..posts.len())
        .map(|i| {
            let (next_slug, next_title) = neighbour(i.checked_sub(1).and_then(|j| posts.get(j)));
            let (prev_slug, prev_title) = neighbour(posts.get(i + 1));
            PrevNextPost {
                prev_slug,
                prev_title,
                next_slug,
                next_title,
            }
        })
        .collect()
}
