//! Content nodes and the content store.
//!
//! - `node`: [`ContentNode`] and its stable [`NodeId`]
//! - `frontmatter`: YAML (`---`) and TOML (`+++`) front-matter parsing
//! - `images`: front-matter image path normalization
//! - `catalog`: product catalog model and loading
//! - `store`: the content query interface and the in-memory [`NodeStore`]
//! - `ingest`: walking the content directory into the store

mod catalog;
mod frontmatter;
mod images;
mod ingest;
mod node;
mod store;

pub use catalog::{CatalogEntry, CatalogProduct, load_catalog};
pub use frontmatter::FrontmatterExtractor;
pub use images::normalize_image_paths;
pub use ingest::{ingest_catalog, ingest_content};
pub use node::{ContentNode, NodeId, NodeKind};
pub use store::{ContentQuery, ContentStore, NodeStore, QueryError, QueryResponse};

/// JSON object map used for front-matter and page context.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
