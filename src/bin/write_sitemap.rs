// src/bin/write_sitemap.rs
use anyhow::{Context, Result};
use std::env;

use fundops_core::{
    application::sitemap::SitemapBuilder,
    config::SiteConfig,
    infrastructure::{
        content::{STATIC_ROUTES, newsletter_backlist, seed_index, tool_catalog},
        time::SystemClock,
    },
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = SiteConfig::from_env()?;
    // Duplicate ids mean corrupt authoring data; refuse to emit anything.
    let index = seed_index().context("content registry failed to build")?;
    let tools = tool_catalog();
    let newsletters = newsletter_backlist();
    let clock = SystemClock;

    let entries = SitemapBuilder::new(
        &index,
        &tools,
        &newsletters,
        STATIC_ROUTES,
        &config,
        &clock,
    )
    .build();
    let manifest = serde_json::to_string_pretty(&entries)?;

    match env::var("SITEMAP_OUT") {
        Ok(path) => {
            std::fs::write(&path, manifest)
                .with_context(|| format!("failed to write sitemap to {path}"))?;
            println!("sitemap written to {path} ({} entries)", entries.len());
        }
        Err(_) => println!("{manifest}"),
    }
    Ok(())
}
