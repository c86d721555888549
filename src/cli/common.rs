//! Shared setup for commands that plan pages.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::content::{NodeStore, ingest_catalog, ingest_content};
use crate::render::{PageRenderer, TemplateRegistry};
use crate::site::{SiteHooks, SiteMapper};
use crate::utils::plural_count;
use crate::{debug, log};

/// Load templates and ingest all content into a fresh store.
pub fn load_site(config: Arc<SiteConfig>) -> Result<(SiteMapper, NodeStore)> {
    let templates = TemplateRegistry::load_dir(&config.build.templates)?;
    debug!("templates"; "{}", plural_count(templates.len(), "template"));

    let mapper = SiteMapper::new(Arc::clone(&config), templates);
    let mut store = NodeStore::new();

    let stats = ingest_content(&config.build.content, &mapper, &mut store)?;
    log!(
        "ingest";
        "{}, {}",
        plural_count(stats.markdown, "markdown node"),
        plural_count(stats.files, "file")
    );

    if config.catalog.enable {
        ingest_catalog(&config.catalog.source, &mut store);
    }

    Ok((mapper, store))
}

/// Await the planning hook once on a current-thread runtime.
pub fn plan_pages<R: PageRenderer>(
    mapper: &SiteMapper,
    store: &NodeStore,
    renderer: &mut R,
) -> Result<usize> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let count = runtime.block_on(mapper.on_plan_pages(store, renderer))?;
    Ok(count)
}
