//! Utility modules shared by the content core and the generators.

pub mod date;
pub mod frontmatter;
pub mod url;
