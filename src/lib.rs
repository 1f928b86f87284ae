//! Glossa: localized content resolution and sitemap freshness for
//! multilingual blogs.
//!
//! # Modules
//!
//! | Module      | Responsibility                                          |
//! |-------------|---------------------------------------------------------|
//! | `content`   | Locale detection, post indexes, navigation, taxonomies  |
//! | `generator` | Sitemap scanning and XML output                         |
//! | `utils`     | URL rules, dates, front matter                          |
//! | `config`    | `glossa.toml` loading and validation                    |
//! | `i18n`      | Supported locales and translated labels                 |

pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod i18n;
pub mod logger;
pub mod utils;
