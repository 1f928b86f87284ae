//! Glossa - localized post indexes and sitemap freshness for multilingual blogs.

use anyhow::{Context, Result, bail};
use clap::Parser;
use glossa::{
    cli::{Cli, Commands},
    config::SiteConfig,
    content::{
        ContentEntry, PostIndex,
        alternates::{post_alternates, static_alternates},
        loader::{load_posts, load_specs},
        spec::spec_for_lang,
        taxonomy::{category_list, tag_list},
    },
    generator::sitemap::build_sitemap,
    log,
    utils::url::Routes,
};
use serde::Serialize;
use std::path::Path;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        log!("error"; "{err:?}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let locales = config.locales();
    let routes = Routes::from_config(&config, &locales)?;

    let lang = cli.lang().unwrap_or_else(|| locales.default_locale());

    let entries: Vec<ContentEntry> = match cli.command {
        Commands::Page { .. } => Vec::new(),
        _ => load_posts(&config.posts_dir())
            .with_context(|| format!("Failed to load posts from {}", config.posts_dir().display()))?,
    };
    let index = PostIndex::new(&entries, &locales, config.build.mode);

    match &cli.command {
        Commands::Posts { lang } => match lang {
            Some(lang) => print_json(&index.list_for_lang(lang)),
            None => print_json(&index.list()),
        },
        Commands::Nav { .. } => print_json(&index.prev_next_map_for_lang(lang)),
        Commands::Tags { lang } => print_json(&tag_list(&index, lang.as_deref())),
        Commands::Categories { lang } => {
            print_json(&category_list(&index, &routes, lang.as_deref()))
        }
        Commands::Alternates { slug, path } => match (slug, path) {
            (Some(slug), _) => print_json(&post_alternates(&index, &routes, slug)),
            (None, Some(path)) => print_json(&static_alternates(&routes, path)),
            (None, None) => bail!("Either a post slug or --path is required"),
        },
        Commands::Page { slug, .. } => {
            let dir = config.spec_dir();
            let pages = load_specs(&dir)
                .with_context(|| format!("Failed to load pages from {}", dir.display()))?;
            match spec_for_lang(&pages, slug, lang, &locales) {
                Some(page) => print_json(page),
                None => bail!("No page `{slug}` in {}", dir.display()),
            }
        }
        Commands::Sitemap => build_sitemap(&config, &index, &routes).await,
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
