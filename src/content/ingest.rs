//! Content ingestion: source files -> nodes -> store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

use super::{
    ContentNode, FrontmatterExtractor, NodeId, NodeKind, NodeStore, QueryError, load_catalog,
};
use crate::site::SiteHooks;
use crate::{debug, log};

/// Counts of ingested nodes by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub markdown: usize,
    pub files: usize,
}

/// Walk `content_dir`, build one node per file, run the node-created hook
/// on each and insert it into `store`.
///
/// Files are visited in sorted path order so node order is stable.
pub fn ingest_content<H: SiteHooks>(
    content_dir: &Path,
    hooks: &H,
    store: &mut NodeStore,
) -> Result<IngestStats> {
    let mut stats = IngestStats::default();

    for path in collect_content_files(content_dir) {
        let relative = path
            .strip_prefix(content_dir)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());

        let mut node = read_node(&path, relative)?;
        hooks
            .on_content_node_created(&mut node)
            .with_context(|| format!("failed to process `{}`", path.display()))?;

        match node.kind {
            NodeKind::Markdown => stats.markdown += 1,
            NodeKind::File => stats.files += 1,
        }
        debug!("ingest"; "{} {}", node.id, node.slug().map(|s| s.as_str()).unwrap_or("-"));
        store.insert(node);
    }

    Ok(stats)
}

/// Load the catalog export into `store`.
///
/// A missing or malformed export is recorded as a query error so the
/// planning query fails instead of planning without products.
pub fn ingest_catalog(path: &Path, store: &mut NodeStore) {
    match load_catalog(path) {
        Ok(catalog) => {
            let products: usize = catalog.iter().map(|e| e.products.len()).sum();
            debug!("catalog"; "{} entries, {} products", catalog.len(), products);
            store.set_catalog(catalog);
        }
        Err(err) => {
            log!("error"; "{:#}", err);
            store.push_error(QueryError::new(format!("{err:#}")));
        }
    }
}

/// Collect non-hidden files under `dir`, sorted.
fn collect_content_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

fn read_node(path: &Path, relative: PathBuf) -> Result<ContentNode> {
    let id = NodeId::from_path(&relative);
    let kind = NodeKind::from_path(&relative);
    let node = ContentNode::new(id, kind, Some(relative));

    if kind != NodeKind::Markdown {
        return Ok(node);
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let (frontmatter, body) = FrontmatterExtractor
        .split(&source)
        .with_context(|| format!("invalid front-matter in `{}`", path.display()))?;

    Ok(node.with_frontmatter(frontmatter).with_body(body))
}
