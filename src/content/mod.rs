//! Localized content resolution.
//!
//! # Data flow
//!
//! ```text
//! loader ──► ContentEntry ──► locale (lang, logical slug)
//!                                  │
//!                                  ▼
//!                             PostIndex ──┬── navigation
//!                                         ├── taxonomy
//!                                         └── alternates
//! ```

pub mod alternates;
pub mod entry;
mod error;
pub mod loader;
pub mod locale;
pub mod navigation;
pub mod posts;
pub mod spec;
pub mod taxonomy;

pub use entry::{CategoryField, ContentEntry, LocalizedEntry, PostData};
pub use error::ContentError;
pub use posts::{PostForList, PostIndex};
