//! Page planning: content nodes -> route descriptors.

use serde_json::json;

use super::SiteError;
use crate::content::{ContentNode, JsonMap};
use crate::render::{RouteDescriptor, TemplateId, TemplateRegistry};

/// Plan one route per node, in input order.
///
/// Every node needs a slug and a `templateKey` naming a registered template.
/// Duplicate slugs produce duplicate descriptors. The first failing node
/// aborts the whole plan.
pub fn plan_pages(
    nodes: &[ContentNode],
    templates: &TemplateRegistry,
) -> Result<Vec<RouteDescriptor>, SiteError> {
    nodes
        .iter()
        .map(|node| plan_page(node, templates))
        .collect()
}

/// Route for a single node: `{ path: slug, template, context: { id } }`.
pub fn plan_page(
    node: &ContentNode,
    templates: &TemplateRegistry,
) -> Result<RouteDescriptor, SiteError> {
    let path = node
        .slug()
        .filter(|slug| !slug.as_str().is_empty())
        .ok_or_else(|| SiteError::MissingSlug(node.id.clone()))?;
    let template = resolve_template(node, templates)?;

    let mut context = JsonMap::new();
    context.insert("id".into(), json!(node.id));

    Ok(RouteDescriptor::new(path.clone(), template, context))
}

fn resolve_template(
    node: &ContentNode,
    templates: &TemplateRegistry,
) -> Result<TemplateId, SiteError> {
    let key = node
        .template_key()
        .ok_or_else(|| SiteError::MissingTemplateKey(node.id.clone()))?;
    templates
        .resolve(&key)
        .ok_or_else(|| SiteError::MissingTemplate {
            key,
            node: node.id.clone(),
        })
}
