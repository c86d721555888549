//! Content query interface and the in-memory node store.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::{CatalogEntry, CatalogProduct, ContentNode, NodeId};
use crate::site::SiteError;

/// One request against the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentQuery {
    /// Max markdown nodes returned (`None` = all).
    pub limit: Option<usize>,
    /// Include the product catalog in the response.
    pub catalog: bool,
}

impl ContentQuery {
    /// Markdown pages only, capped at `limit`.
    pub const fn pages(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            catalog: false,
        }
    }

    /// All markdown nodes plus the product catalog.
    pub const fn catalog() -> Self {
        Self {
            limit: None,
            catalog: true,
        }
    }
}

/// Error reported by the content store for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for QueryError {}

/// Query result payload.
#[derive(Debug, Clone, Default)]
pub struct ContentGraph {
    /// Markdown nodes in store order.
    pub markdown: Vec<ContentNode>,
    /// Catalog entries in export order (empty unless requested).
    pub catalog: Vec<CatalogEntry>,
}

/// Query response: a payload, or a non-empty error list.
#[derive(Debug, Clone, Default)]
pub struct QueryResponse {
    pub data: Option<ContentGraph>,
    pub errors: Vec<QueryError>,
}

impl QueryResponse {
    pub fn ok(data: ContentGraph) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<QueryError>) -> Self {
        Self { data: None, errors }
    }

    /// Treat any reported error as a failure of the whole query.
    pub fn into_result(self) -> Result<ContentGraph, SiteError> {
        if !self.errors.is_empty() {
            return Err(SiteError::Query(self.errors));
        }
        self.data
            .ok_or_else(|| SiteError::Query(vec![QueryError::new("query returned no data")]))
    }
}

/// Source of content nodes for page planning.
///
/// One query is awaited per planning run; its result is never re-read.
#[allow(async_fn_in_trait)]
pub trait ContentStore {
    async fn query(&self, query: &ContentQuery) -> QueryResponse;
}

/// In-memory store filled at ingestion time.
#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: Vec<ContentNode>,
    index: FxHashMap<NodeId, usize>,
    catalog: Vec<CatalogEntry>,
    /// Errors from loading sources, reported by every query.
    errors: Vec<QueryError>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node; a node with the same id replaces the earlier one.
    pub fn insert(&mut self, node: ContentNode) {
        match self.index.get(&node.id) {
            Some(&pos) => self.nodes[pos] = node,
            None => {
                self.index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn set_catalog(&mut self, catalog: Vec<CatalogEntry>) {
        self.catalog = catalog;
    }

    /// Record a source error; subsequent queries fail with it.
    pub fn push_error(&mut self, error: QueryError) {
        self.errors.push(error);
    }

    pub fn get(&self, id: &NodeId) -> Option<&ContentNode> {
        self.index.get(id).map(|&pos| &self.nodes[pos])
    }

    /// Find a catalog product by handle (first occurrence).
    pub fn product(&self, handle: &str) -> Option<&CatalogProduct> {
        self.catalog
            .iter()
            .flat_map(|entry| entry.products.iter())
            .find(|product| product.handle == handle)
    }

    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl ContentStore for NodeStore {
    async fn query(&self, query: &ContentQuery) -> QueryResponse {
        if !self.errors.is_empty() {
            return QueryResponse::failed(self.errors.clone());
        }

        let limit = query.limit.unwrap_or(usize::MAX);
        let markdown = self
            .nodes
            .iter()
            .filter(|node| node.is_markdown())
            .take(limit)
            .cloned()
            .collect();
        let catalog = if query.catalog {
            self.catalog.clone()
        } else {
            Vec::new()
        };

        QueryResponse::ok(ContentGraph { markdown, catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NodeKind;
    use std::path::PathBuf;

    fn store_with(paths: &[&str]) -> NodeStore {
        let mut store = NodeStore::new();
        for path in paths {
            store.insert(ContentNode::markdown(*path));
        }
        store
    }

    #[tokio::test]
    async fn test_query_returns_markdown_in_order() {
        let mut store = store_with(&["b.md", "a.md"]);
        store.insert(ContentNode::new(
            NodeId::new("file-1"),
            NodeKind::File,
            Some(PathBuf::from("img.png")),
        ));

        let graph = store
            .query(&ContentQuery::pages(1000))
            .await
            .into_result()
            .unwrap();
        let paths: Vec<_> = graph
            .markdown
            .iter()
            .map(|n| n.path.clone().unwrap())
            .collect();
        assert_eq!(paths, [PathBuf::from("b.md"), PathBuf::from("a.md")]);
        assert!(graph.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_query_limit() {
        let store = store_with(&["a.md", "b.md", "c.md"]);
        let graph = store
            .query(&ContentQuery::pages(2))
            .await
            .into_result()
            .unwrap();
        assert_eq!(graph.markdown.len(), 2);
    }

    #[tokio::test]
    async fn test_catalog_query() {
        let mut store = store_with(&["a.md"]);
        store.set_catalog(vec![CatalogEntry {
            id: "main".into(),
            products: vec![CatalogProduct::new("mug")],
        }]);

        let graph = store
            .query(&ContentQuery::catalog())
            .await
            .into_result()
            .unwrap();
        assert_eq!(graph.catalog.len(), 1);
        assert_eq!(store.product("mug").unwrap().handle, "mug");
        assert!(store.product("cup").is_none());
    }

    #[tokio::test]
    async fn test_source_errors_fail_query() {
        let mut store = store_with(&["a.md"]);
        store.push_error(QueryError::new("malformed catalog"));

        let response = store.query(&ContentQuery::pages(10)).await;
        assert!(response.data.is_none());
        match response.into_result() {
            Err(SiteError::Query(errors)) => assert_eq!(errors[0].message, "malformed catalog"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_errors_win_over_data() {
        let response = QueryResponse {
            data: Some(ContentGraph::default()),
            errors: vec![QueryError::new("boom")],
        };
        assert!(matches!(response.into_result(), Err(SiteError::Query(_))));
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut store = store_with(&["a.md"]);
        let replacement = ContentNode::markdown("a.md").with_body("new");
        let id = replacement.id.clone();
        store.insert(replacement);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().body, "new");
    }
}
