//! Content loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning content files into collection entries.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Missing front matter in `{0}`")]
    MissingFrontMatter(PathBuf),

    #[error("Invalid front matter in `{path}`")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Invalid `{field}` date `{value}` in `{path}`")]
    InvalidDate {
        path: PathBuf,
        field: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_display() {
        let err = ContentError::MissingFrontMatter(PathBuf::from("posts/a.md"));
        assert_eq!(err.to_string(), "Missing front matter in `posts/a.md`");

        let err = ContentError::InvalidDate {
            path: PathBuf::from("posts/a.md"),
            field: "published",
            value: "soon".into(),
        };
        assert_eq!(err.to_string(), "Invalid `published` date `soon` in `posts/a.md`");
    }
}
