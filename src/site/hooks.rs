//! Build lifecycle hooks.
//!
//! The build driver calls them in order:
//!
//! 1. [`SiteHooks::on_build_config`] once, to resolve bundler aliases
//! 2. [`SiteHooks::on_content_node_created`] once per ingested node
//! 3. [`SiteHooks::on_plan_pages`] once, after ingestion

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use super::{SiteError, derive_slug, plan_catalog_pages, plan_pages};
use crate::config::SiteConfig;
use crate::content::{ContentNode, ContentQuery, ContentStore, normalize_image_paths};
use crate::render::{PageRenderer, TemplateRegistry};
use crate::{debug, log};

/// Bundler settings produced at config time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundlerConfig {
    /// Alias name -> absolute directory.
    pub aliases: BTreeMap<String, PathBuf>,
}

#[allow(async_fn_in_trait)]
pub trait SiteHooks {
    /// Bundler configuration for this site.
    fn on_build_config(&self) -> BundlerConfig;

    /// Transform a freshly ingested node before it enters the store.
    fn on_content_node_created(&self, node: &mut ContentNode) -> Result<(), SiteError>;

    /// Query the store and register every planned page with `renderer`.
    ///
    /// Planning completes before the first registration, so an error leaves
    /// `renderer` untouched. Returns the number of registered pages.
    async fn on_plan_pages<S, R>(&self, store: &S, renderer: &mut R) -> Result<usize, SiteError>
    where
        S: ContentStore,
        R: PageRenderer;
}

/// Default hooks: slug derivation, page planning and catalog reconciliation
/// driven by `pagemap.toml`.
#[derive(Debug, Clone)]
pub struct SiteMapper {
    config: Arc<SiteConfig>,
    templates: TemplateRegistry,
}

impl SiteMapper {
    pub fn new(config: Arc<SiteConfig>, templates: TemplateRegistry) -> Self {
        Self { config, templates }
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// The single query issued per planning run.
    fn query(&self) -> ContentQuery {
        if self.config.catalog.enable {
            ContentQuery::catalog()
        } else {
            ContentQuery::pages(self.config.build.query_limit)
        }
    }
}

impl SiteHooks for SiteMapper {
    fn on_build_config(&self) -> BundlerConfig {
        let aliases = self
            .config
            .build
            .alias
            .iter()
            .map(|(name, dir)| (name.clone(), self.config.root_join(dir)))
            .collect();
        BundlerConfig { aliases }
    }

    fn on_content_node_created(&self, node: &mut ContentNode) -> Result<(), SiteError> {
        let build = &self.config.build;

        if let Some(path) = &node.path {
            let node_dir = build
                .content
                .join(path)
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| build.content.clone());
            let rewritten = normalize_image_paths(&mut node.frontmatter, &node_dir, &build.static_dir);
            if rewritten > 0 {
                debug!("images"; "{} path(s) rewritten in {}", rewritten, path.display());
            }
        }

        if !node.is_markdown() {
            return Ok(());
        }

        let slug = match &node.path {
            Some(path) => derive_slug(path, &build.slug),
            None => return Err(SiteError::MissingPath(node.id.clone())),
        };
        node.set_slug(slug)
    }

    async fn on_plan_pages<S, R>(&self, store: &S, renderer: &mut R) -> Result<usize, SiteError>
    where
        S: ContentStore,
        R: PageRenderer,
    {
        let graph = store.query(&self.query()).await.into_result()?;

        let pages = if self.config.catalog.enable {
            plan_catalog_pages(
                &graph.markdown,
                &graph.catalog,
                &self.config.catalog,
                &self.templates,
            )?
        } else {
            plan_pages(&graph.markdown, &self.templates)?
        };

        let count = pages.len();
        for page in pages {
            renderer.create_page(page);
        }
        log!("plan"; "{} page(s) from {} node(s)", count, graph.markdown.len());

        Ok(count)
    }
}
