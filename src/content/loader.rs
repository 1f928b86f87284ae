//! Load Markdown collections from disk.
//!
//! # Entry identity
//!
//! | File (relative to collection root) | `id`              | `slug`        |
//! |------------------------------------|-------------------|---------------|
//! | `hello.md`                         | `hello.md`        | `hello`       |
//! | `vi/hello.mdx`                     | `vi/hello.mdx`    | `vi/hello`    |
//! | `en/series/part-1/index.md`        | `en/series/part-1/index.md` | `en/series/part-1` |

use super::{
    entry::{CategoryField, ContentEntry, PostData},
    error::ContentError,
    spec::SpecEntry,
};
use crate::{
    log,
    utils::{
        date::{self, format_ymd, is_in_future},
        frontmatter,
    },
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_yaml_ng::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Post front matter as written by authors, before date normalization.
#[derive(Debug, Deserialize)]
struct RawPostFrontMatter {
    title: String,
    published: Value,
    #[serde(default)]
    updated: Option<Value>,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    category: Option<CategoryField>,
    #[serde(default)]
    lang: String,
}

/// Markdown files under `dir`, in path order.
fn collect_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    fs::metadata(dir).map_err(|err| ContentError::Io(dir.to_path_buf(), err))?;

    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str().is_some_and(frontmatter::is_markdown))
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();
    Ok(files)
}

/// `id` and `slug` of a file relative to its collection root.
fn entry_identity(root: &Path, path: &Path) -> (String, String) {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let id = relative.to_string_lossy().replace('\\', "/");
    let without_ext = id.rsplit_once('.').map_or(id.as_str(), |(stem, _)| stem);
    let slug = without_ext.strip_suffix("/index").unwrap_or(without_ext);
    (id.clone(), slug.to_owned())
}

fn read(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))
}

fn parse_date_field(path: &Path, field: &'static str, value: &Value) -> Result<NaiveDateTime, ContentError> {
    frontmatter::date_value(value).ok_or_else(|| ContentError::InvalidDate {
        path: path.to_path_buf(),
        field,
        value: match value {
            Value::String(s) => s.clone(),
            other => format!("{other:?}"),
        },
    })
}

/// Parse one post file.
fn load_post(root: &Path, path: &Path) -> Result<ContentEntry, ContentError> {
    let content = read(path)?;
    let raw = frontmatter::extract(&content)
        .ok_or_else(|| ContentError::MissingFrontMatter(path.to_path_buf()))?;
    let meta: RawPostFrontMatter =
        frontmatter::parse(raw).map_err(|source| ContentError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

    let published = parse_date_field(path, "published", &meta.published)?;
    let updated = match meta.updated.as_ref().filter(|v| !v.is_null()) {
        Some(value) => Some(parse_date_field(path, "updated", value)?),
        None => None,
    };

    let (id, slug) = entry_identity(root, path);
    let data = PostData {
        title: meta.title,
        published,
        updated,
        draft: meta.draft,
        description: meta.description,
        image: meta.image,
        tags: meta.tags,
        category: meta.category,
        lang: Some(meta.lang).filter(|lang| !lang.is_empty()),
    };
    Ok(ContentEntry::new(id, data).with_slug(slug))
}

/// Load every post under `dir`.
///
/// Fails on the first file that cannot be read or does not match the post
/// schema. Posts dated in the future are loaded and reported.
pub fn load_posts(dir: &Path) -> Result<Vec<ContentEntry>, ContentError> {
    let files = collect_markdown_files(dir)?;
    let posts = files
        .iter()
        .map(|path| load_post(dir, path))
        .collect::<Result<Vec<_>, _>>()?;

    let now = date::now();
    for post in posts.iter().filter(|p| is_in_future(&p.data.published, &now)) {
        log!("content"; "scheduled: {} ({})", post.id, format_ymd(&post.data.published));
    }
    log!("content"; "loaded {} posts from {}", posts.len(), dir.display());

    Ok(posts)
}

/// Parse one standalone page. Front matter is optional.
fn load_spec(root: &Path, path: &Path) -> Result<SpecEntry, ContentError> {
    let content = read(path)?;
    let lang = match frontmatter::extract(&content) {
        Some(raw) => {
            let map = frontmatter::parse_mapping(raw).map_err(|source| {
                ContentError::FrontMatter {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            map.get("lang")
                .and_then(Value::as_str)
                .filter(|lang| !lang.is_empty())
                .map(str::to_owned)
        }
        None => None,
    };

    let (id, slug) = entry_identity(root, path);
    Ok(SpecEntry {
        id,
        slug: Some(slug),
        lang,
        body: frontmatter::body(&content).to_owned(),
    })
}

/// Load every standalone page under `dir`.
pub fn load_specs(dir: &Path) -> Result<Vec<SpecEntry>, ContentError> {
    collect_markdown_files(dir)?
        .iter()
        .map(|path| load_spec(dir, path))
        .collect()
}
