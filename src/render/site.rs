//! Static site renderer: registered pages -> `index.html` files.

use std::fs;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde_json::{Value, json};

use super::{PageRenderer, RouteDescriptor, TemplateRegistry, markdown_to_html};
use crate::config::SiteConfig;
use crate::content::{JsonMap, NodeId, NodeStore};
use crate::core::UrlPath;
use crate::{debug, log};

/// Context keys that name the markdown node of a page.
const NODE_CONTEXT_KEYS: &[&str] = &["id", "markdownId"];
/// Context key that names a catalog product.
const PRODUCT_CONTEXT_KEY: &str = "handle";

/// Outcome of writing the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Files written.
    pub pages: usize,
    /// Registrations dropped because a later page claimed the same path.
    pub overwritten: usize,
}

/// Renderer that keeps registrations in order and writes them on demand.
///
/// Pages sharing a path are all registered; the last registration wins.
#[derive(Debug, Default)]
pub struct StaticSite {
    pages: Vec<RouteDescriptor>,
}

impl PageRenderer for StaticSite {
    fn create_page(&mut self, page: RouteDescriptor) {
        debug!("page"; "{} <- {}", page.path, page.template);
        self.pages.push(page);
    }
}

impl StaticSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered pages in registration order.
    pub fn pages(&self) -> &[RouteDescriptor] {
        &self.pages
    }

    /// Render every winning page into `config.build.output`.
    pub fn write(
        &self,
        store: &NodeStore,
        templates: &TemplateRegistry,
        config: &SiteConfig,
    ) -> Result<RenderStats> {
        let output = &config.build.output;
        if config.build.clean && output.exists() {
            fs::remove_dir_all(output)
                .with_context(|| format!("failed to clean `{}`", output.display()))?;
        }

        let winners = self.winning_pages();
        let site = serde_json::to_value(&config.site)?;

        for page in &winners {
            let vars = page_vars(page, store, &site);
            let html = templates
                .render(&page.template, &vars)
                .with_context(|| format!("failed to render `{}`", page.path))?;

            let file = page.path.output_file(output);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create `{}`", parent.display()))?;
            }
            fs::write(&file, html).with_context(|| format!("failed to write `{}`", file.display()))?;
        }

        Ok(RenderStats {
            pages: winners.len(),
            overwritten: self.pages.len() - winners.len(),
        })
    }

    /// Last registration per path, in first-registration order.
    fn winning_pages(&self) -> Vec<&RouteDescriptor> {
        let mut last: FxHashMap<&UrlPath, usize> = FxHashMap::default();
        let mut order: Vec<&UrlPath> = Vec::new();
        for (i, page) in self.pages.iter().enumerate() {
            if last.insert(&page.path, i).is_none() {
                order.push(&page.path);
            } else {
                log!("warning"; "`{}` registered more than once, last one wins", page.path);
            }
        }
        order.iter().map(|path| &self.pages[last[path]]).collect()
    }
}

/// Variables available to a page's template.
fn page_vars(page: &RouteDescriptor, store: &NodeStore, site: &Value) -> Value {
    let mut vars = JsonMap::new();

    let node = NODE_CONTEXT_KEYS
        .iter()
        .filter_map(|key| page.context.get(*key).and_then(Value::as_str))
        .filter(|id| !id.is_empty())
        .find_map(|id| store.get(&NodeId::new(id)));

    if let Some(node) = node {
        vars.extend(node.frontmatter.clone());
        vars.insert("content".into(), Value::String(markdown_to_html(&node.body)));
        if let Some(slug) = node.slug() {
            vars.insert("slug".into(), json!(slug));
        }
    }

    if let Some(handle) = page.context.get(PRODUCT_CONTEXT_KEY).and_then(Value::as_str)
        && let Some(product) = store.product(handle)
    {
        vars.insert("product".into(), json!(product));
    }

    vars.insert("site".into(), site.clone());
    vars.insert("path".into(), json!(page.path));
    vars.insert("context".into(), Value::Object(page.context.clone()));
    Value::Object(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::{CatalogEntry, CatalogProduct, ContentNode};
    use tempfile::TempDir;

    fn context(pairs: &[(&str, &str)]) -> JsonMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    fn setup() -> (TempDir, SiteConfig, TemplateRegistry, NodeStore) {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.build.output = dir.path().join("public");

        let mut templates = TemplateRegistry::new();
        templates
            .register("blog-post", "{{ site.title }}|{{ title }}|{{ content | safe }}")
            .unwrap();
        templates
            .register(
                "product-page",
                "{{ product.handle }}|{{ title | default(value=\"\") }}|{{ path | safe }}",
            )
            .unwrap();
        templates.register("typo", "{{ titel }}").unwrap();

        let mut store = NodeStore::new();
        let mut fm = JsonMap::new();
        fm.insert("title".into(), json!("Post"));
        let mut node = ContentNode::markdown("blog/post.md")
            .with_frontmatter(fm)
            .with_body("*hi*");
        node.set_slug(UrlPath::new("/blog/post/")).unwrap();
        store.insert(node);
        store.set_catalog(vec![CatalogEntry {
            id: "main".into(),
            products: vec![CatalogProduct::new("mug")],
        }]);

        (dir, config, templates, store)
    }

    #[test]
    fn test_write_markdown_page() {
        let (_dir, config, templates, store) = setup();
        let id = store.nodes()[0].id.to_string();

        let mut site = StaticSite::new();
        site.create_page(RouteDescriptor::new(
            UrlPath::new("/blog/post/"),
            templates.resolve("blog-post").unwrap(),
            context(&[("id", id.as_str())]),
        ));

        let stats = site.write(&store, &templates, &config).unwrap();
        assert_eq!(stats, RenderStats { pages: 1, overwritten: 0 });

        let html = fs::read_to_string(config.build.output.join("blog/post/index.html")).unwrap();
        assert!(html.starts_with("Test|Post|<p><em>hi</em></p>"));
    }

    #[test]
    fn test_write_product_page_without_override() {
        let (_dir, config, templates, store) = setup();

        let mut site = StaticSite::new();
        site.create_page(RouteDescriptor::new(
            UrlPath::new("/products/mug"),
            templates.resolve("product-page").unwrap(),
            context(&[("markdownId", ""), ("handle", "mug")]),
        ));
        site.write(&store, &templates, &config).unwrap();

        let html = fs::read_to_string(config.build.output.join("products/mug/index.html")).unwrap();
        assert_eq!(html, "mug||/products/mug");
    }

    #[test]
    fn test_last_registration_wins() {
        let (_dir, config, templates, store) = setup();
        let template = templates.resolve("product-page").unwrap();

        let mut site = StaticSite::new();
        site.create_page(RouteDescriptor::new(
            UrlPath::new("/dup/"),
            template.clone(),
            context(&[("handle", "first")]),
        ));
        site.create_page(RouteDescriptor::new(
            UrlPath::new("/dup/"),
            template,
            context(&[("handle", "mug")]),
        ));

        let stats = site.write(&store, &templates, &config).unwrap();
        assert_eq!(stats, RenderStats { pages: 1, overwritten: 1 });
        assert_eq!(site.pages().len(), 2);

        let html = fs::read_to_string(config.build.output.join("dup/index.html")).unwrap();
        assert!(html.starts_with("mug|"));
    }

    #[test]
    fn test_render_error_names_page() {
        let (_dir, config, templates, store) = setup();

        let mut site = StaticSite::new();
        site.create_page(RouteDescriptor::new(
            UrlPath::new("/broken/"),
            templates.resolve("typo").unwrap(),
            JsonMap::new(),
        ));

        let err = site.write(&store, &templates, &config).unwrap_err();
        assert!(format!("{err:#}").contains("/broken/"));
        assert!(!config.build.output.join("broken/index.html").exists());
    }

    #[test]
    fn test_product_variants_listed() {
        let (_dir, config, mut templates, mut store) = setup();
        let id = templates
            .register(
                "variants",
                "{% for v in product.variants %}{{ v.title }};{% endfor %}",
            )
            .unwrap();
        let mug: CatalogProduct = serde_json::from_value(json!({
            "handle": "mug",
            "variants": [{ "title": "Blue" }, { "title": "Red" }]
        }))
        .unwrap();
        store.set_catalog(vec![CatalogEntry {
            id: "main".into(),
            products: vec![mug],
        }]);

        let mut site = StaticSite::new();
        site.create_page(RouteDescriptor::new(
            UrlPath::new("/products/mug"),
            id,
            context(&[("handle", "mug")]),
        ));
        site.write(&store, &templates, &config).unwrap();

        let html = fs::read_to_string(config.build.output.join("products/mug/index.html")).unwrap();
        assert_eq!(html, "Blue;Red;");
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let (_dir, mut config, templates, store) = setup();
        fs::create_dir_all(config.build.output.join("old")).unwrap();
        fs::write(config.build.output.join("old/index.html"), "stale").unwrap();
        config.build.clean = true;

        StaticSite::new().write(&store, &templates, &config).unwrap();
        assert!(!config.build.output.join("old").exists());
    }
}
