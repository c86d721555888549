//! Catalog reconciliation: catalog products + markdown overrides -> routes.
//!
//! A product normally lives at `/products/{handle}`. A markdown node whose
//! slug is that path (with or without a trailing `/`) takes the product over
//! and moves it to `/products/{overrideSlug}`.

use serde::Serialize;
use serde_json::json;

use super::{SiteError, plan_page};
use crate::config::CatalogConfig;
use crate::content::{CatalogEntry, ContentNode, JsonMap, NodeId};
use crate::core::UrlPath;
use crate::log;
use crate::render::{RouteDescriptor, TemplateRegistry};

/// Front-matter key naming the replacement handle of an overridden product.
pub const OVERRIDE_SLUG_KEY: &str = "overrideSlug";

/// Final route of one catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedProductRoute {
    pub path: UrlPath,
    /// Id of the overriding markdown node, empty when the product has none.
    pub source_id: String,
    pub handle: String,
}

/// Merge catalog products with markdown overrides, in catalog order.
///
/// Every node is checked against every product; when several nodes match,
/// the last one wins. The placeholder entry is skipped.
pub fn reconcile(
    nodes: &[ContentNode],
    catalog: &[CatalogEntry],
    config: &CatalogConfig,
) -> Result<Vec<MergedProductRoute>, SiteError> {
    let prefix = config.route_prefix();
    let mut routes = Vec::new();

    for entry in catalog {
        if entry.id == config.placeholder_id {
            continue;
        }

        for product in &entry.products {
            let default_path = format!("{prefix}{}", product.handle);
            let with_slash = format!("{default_path}/");

            // Full scan, no early exit: a later match replaces an earlier one.
            let mut matched = None;
            for node in nodes {
                if let Some(slug) = node.slug()
                    && (slug.as_str() == default_path || slug.as_str() == with_slash)
                {
                    matched = Some(node);
                }
            }

            let route = match matched {
                Some(node) => {
                    let slug = override_slug(node, &product.handle)?;
                    let route = MergedProductRoute {
                        path: UrlPath::new(&format!("{prefix}{slug}")),
                        source_id: node.id.to_string(),
                        handle: product.handle.clone(),
                    };
                    log!("markdown"; "{}", route.path);
                    route
                }
                None => {
                    let route = MergedProductRoute {
                        path: UrlPath::new(&default_path),
                        source_id: String::new(),
                        handle: product.handle.clone(),
                    };
                    log!("defaults"; "{}", route.path);
                    route
                }
            };
            routes.push(route);
        }
    }

    Ok(routes)
}

/// Non-empty `overrideSlug`, appended to the prefix verbatim.
fn override_slug<'a>(node: &'a ContentNode, handle: &str) -> Result<&'a str, SiteError> {
    node.frontmatter_str(OVERRIDE_SLUG_KEY)
        .filter(|slug| !slug.is_empty())
        .ok_or_else(|| SiteError::MissingOverrideSlug {
            node: node.id.clone(),
            handle: handle.to_string(),
        })
}

/// Plan the catalog flow: one page per product, then one page per markdown
/// node outside the product prefix (the prefix index page included).
pub fn plan_catalog_pages(
    nodes: &[ContentNode],
    catalog: &[CatalogEntry],
    config: &CatalogConfig,
    templates: &TemplateRegistry,
) -> Result<Vec<RouteDescriptor>, SiteError> {
    let product_template =
        templates
            .resolve(&config.template)
            .ok_or_else(|| SiteError::MissingTemplate {
                key: config.template.clone(),
                node: NodeId::new(""),
            })?;

    let mut pages: Vec<RouteDescriptor> = reconcile(nodes, catalog, config)?
        .into_iter()
        .map(|route| {
            let mut context = JsonMap::new();
            context.insert("markdownId".into(), json!(route.source_id));
            context.insert("handle".into(), json!(route.handle));
            RouteDescriptor::new(route.path, product_template.clone(), context)
        })
        .collect();

    let prefix = config.route_prefix();
    for node in nodes {
        let Some(slug) = node.slug() else {
            return Err(SiteError::MissingSlug(node.id.clone()));
        };
        if !slug.starts_with(&prefix) || slug.as_str() == prefix {
            pages.push(plan_page(node, templates)?);
        }
    }

    Ok(pages)
}
