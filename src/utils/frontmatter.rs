//! Front matter extraction for Markdown content files.
//!
//! A front matter block is the leading region delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! published: 2024-01-15
//! ---
//! Body text...
//! ```

use super::date::{from_timestamp_millis, parse_date};
use chrono::NaiveDateTime;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_yaml_ng::{Mapping, Value};
use std::sync::LazyLock;

static FRONTMATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---\s*[\r\n]+((?s:.*?))\r?\n---\s*").unwrap());

/// Markdown-family file extensions.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Returns true if `file_name` ends with a Markdown-family extension.
pub fn is_markdown(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Raw text of the leading front matter block, without delimiters.
pub fn extract(content: &str) -> Option<&str> {
    FRONTMATTER_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text following the front matter block (the whole input if there is none).
pub fn body(content: &str) -> &str {
    FRONTMATTER_RE
        .find(content)
        .map_or(content, |m| &content[m.end()..])
}

/// Parse the front matter as a YAML mapping.
///
/// An empty block yields an empty mapping; a block that is valid YAML but not
/// a mapping is an error.
pub fn parse_mapping(raw: &str) -> Result<Mapping, serde_yaml_ng::Error> {
    match serde_yaml_ng::from_str::<Value>(raw)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(serde::de::Error::custom(format!(
            "front matter is not a mapping: {other:?}"
        ))),
    }
}

/// Deserialize the front matter into a typed schema.
pub fn parse<T: DeserializeOwned>(raw: &str) -> Result<T, serde_yaml_ng::Error> {
    serde_yaml_ng::from_str(raw)
}

/// Interpret a front matter value as a date.
///
/// Strings go through [`parse_date`]; integers are milliseconds since the
/// Unix epoch. Anything else is not a date.
pub fn date_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date(s),
        Value::Number(n) => n.as_i64().and_then(from_timestamp_millis),
        Value::Tagged(tagged) => date_value(&tagged.value),
        _ => None,
    }
}
