//! `pagemap build`: ingest -> plan -> render.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

use super::common::{load_site, plan_pages};
use crate::config::SiteConfig;
use crate::log;
use crate::render::{RenderStats, StaticSite};
use crate::site::SiteHooks;
use crate::utils::plural_count;

/// Build the site into `config.build.output`.
pub fn build_site(config: Arc<SiteConfig>) -> Result<RenderStats> {
    let start = Instant::now();
    let (mapper, store) = load_site(Arc::clone(&config))?;

    let mut site = StaticSite::new();
    plan_pages(&mapper, &store, &mut site)?;

    let stats = site.write(&store, mapper.templates(), &config)?;
    if stats.overwritten > 0 {
        log!("warning"; "{} replaced by later registrations", plural_count(stats.overwritten, "page"));
    }
    log!(
        "build";
        "{} written to {} in {:.2?}",
        plural_count(stats.pages, "page"),
        config.root_relative(&config.build.output).display(),
        start.elapsed()
    );

    Ok(stats)
}

/// Print the resolved bundler aliases as JSON.
pub fn print_aliases(config: Arc<SiteConfig>) -> Result<()> {
    let mapper = crate::site::SiteMapper::new(config, Default::default());
    let bundler = mapper.on_build_config();
    println!("{}", serde_json::to_string_pretty(&bundler)?);
    Ok(())
}
