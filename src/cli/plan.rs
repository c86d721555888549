//! `pagemap plan`: print the planned routes without writing anything.

use std::sync::Arc;

use anyhow::Result;

use super::common::{load_site, plan_pages};
use crate::config::SiteConfig;
use crate::render::RouteDescriptor;

/// Plan all pages and print them as a table or as JSON.
pub fn print_plan(config: Arc<SiteConfig>, json: bool) -> Result<()> {
    let (mapper, store) = load_site(config)?;

    let mut routes: Vec<RouteDescriptor> = Vec::new();
    plan_pages(&mapper, &store, &mut routes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        print!("{}", format_table(&routes));
    }
    Ok(())
}

fn format_table(routes: &[RouteDescriptor]) -> String {
    let width = routes
        .iter()
        .map(|r| r.path.as_str().len())
        .max()
        .unwrap_or(0)
        .max("PATH".len());

    let mut out = format!("{:<width$}  TEMPLATE\n", "PATH");
    for route in routes {
        out.push_str(&format!("{:<width$}  {}\n", route.path.as_str(), route.template));
    }
    out
}
