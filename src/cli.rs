//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Glossa: localized post indexes and sitemap freshness for multilingual blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file name (default: glossa.toml)
    #[arg(short = 'C', long, default_value = "glossa.toml", global = true)]
    pub config: PathBuf,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true)]
    pub content: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Development build: include draft posts
    #[arg(long, global = true)]
    pub dev: bool,

    /// Override base URL for the site.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the date-sorted post list for a locale as JSON
    Posts {
        /// Locale to resolve posts for; lists every variant when omitted
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print the prev/next navigation map for a locale as JSON
    Nav {
        /// Locale to resolve posts for
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print tag counts for a locale as JSON
    Tags {
        /// Locale to resolve posts for (default locale when omitted)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print the category tree for a locale as JSON
    Categories {
        /// Locale to resolve posts for (default locale when omitted)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print alternate-language links for a post or a static path as JSON
    Alternates {
        /// Logical slug of a post
        #[arg(required_unless_present = "path", conflicts_with = "path")]
        slug: Option<String>,

        /// Static path (e.g. "/about/") instead of a post
        #[arg(long)]
        path: Option<String>,
    },

    /// Print the best localization of a standalone page as JSON
    Page {
        /// Logical slug of the page, e.g. "about"
        slug: String,

        /// Locale to resolve the page for (default locale when omitted)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Write the sitemap with per-post lastmod dates
    Sitemap,
}

impl Cli {
    /// Locale argument of the active subcommand, if it takes one.
    pub fn lang(&self) -> Option<&str> {
        match &self.command {
            Commands::Posts { lang }
            | Commands::Nav { lang }
            | Commands::Tags { lang }
            | Commands::Categories { lang }
            | Commands::Page { lang, .. } => lang.as_deref(),
            Commands::Alternates { .. } | Commands::Sitemap => None,
        }
    }
}
