//! Output generators.

pub mod sitemap;
