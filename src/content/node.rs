//! Content node: one ingested source file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::JsonMap;
use crate::core::UrlPath;
use crate::site::SiteError;

/// Front-matter key naming the template a node renders with.
pub const TEMPLATE_KEY: &str = "templateKey";

/// Stable identifier of a content node.
///
/// Derived from the content-relative source path, so the same file keeps
/// the same id across builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Hash a content-relative path into an id (`md-` + 16 hex digits).
    pub fn from_path(relative: &Path) -> Self {
        let normalized = relative.to_string_lossy().replace('\\', "/");
        let hash = blake3::hash(normalized.as_bytes());
        Self(format!("md-{}", hex::encode(&hash.as_bytes()[..8])))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content type of a node. Only markdown nodes get slugs and pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Markdown,
    File,
}

impl NodeKind {
    /// Classify a source file by extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown") => {
                Self::Markdown
            }
            _ => Self::File,
        }
    }
}

/// A parsed content item.
#[derive(Debug, Clone, Serialize)]
pub struct ContentNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Source path relative to the content root (`None` if unresolvable).
    pub path: Option<PathBuf>,
    pub frontmatter: JsonMap,
    /// Markdown body without front-matter.
    #[serde(skip)]
    pub body: String,
    slug: Option<UrlPath>,
}

impl ContentNode {
    pub fn new(id: NodeId, kind: NodeKind, path: Option<PathBuf>) -> Self {
        Self {
            id,
            kind,
            path,
            frontmatter: JsonMap::new(),
            body: String::new(),
            slug: None,
        }
    }

    /// Markdown node at `path` with an id derived from the path.
    pub fn markdown(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(NodeId::from_path(&path), NodeKind::Markdown, Some(path))
    }

    pub fn with_frontmatter(mut self, frontmatter: JsonMap) -> Self {
        self.frontmatter = frontmatter;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    #[inline]
    pub fn is_markdown(&self) -> bool {
        self.kind == NodeKind::Markdown
    }

    /// Computed slug, if the node has one.
    #[inline]
    pub fn slug(&self) -> Option<&UrlPath> {
        self.slug.as_ref()
    }

    /// Attach the computed slug. A slug is set at most once.
    pub fn set_slug(&mut self, slug: UrlPath) -> Result<(), SiteError> {
        if self.slug.is_some() {
            return Err(SiteError::SlugAlreadySet(self.id.clone()));
        }
        self.slug = Some(slug);
        Ok(())
    }

    /// String value of a front-matter field.
    pub fn frontmatter_str(&self, key: &str) -> Option<&str> {
        self.frontmatter.get(key).and_then(|v| v.as_str())
    }

    /// The `templateKey` front-matter value as a string.
    ///
    /// Numbers and booleans are converted (`42` -> `"42"`); empty strings,
    /// `null`, lists and maps count as missing.
    pub fn template_key(&self) -> Option<String> {
        let key = match self.frontmatter.get(TEMPLATE_KEY)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!key.is_empty()).then_some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_id_stable() {
        let a = NodeId::from_path(Path::new("blog/post-1.md"));
        let b = NodeId::from_path(Path::new("blog/post-1.md"));
        let c = NodeId::from_path(Path::new("blog/post-2.md"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_str().starts_with("md-"));
        assert_eq!(a.as_str().len(), 3 + 16);
    }

    #[test]
    fn test_node_id_ignores_separator_style() {
        assert_eq!(
            NodeId::from_path(Path::new("blog\\post.md")),
            NodeId::from_path(Path::new("blog/post.md"))
        );
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(NodeKind::from_path(Path::new("a/b.md")), NodeKind::Markdown);
        assert_eq!(NodeKind::from_path(Path::new("a/b.MARKDOWN")), NodeKind::Markdown);
        assert_eq!(NodeKind::from_path(Path::new("a/b.png")), NodeKind::File);
        assert_eq!(NodeKind::from_path(Path::new("README")), NodeKind::File);
    }

    #[test]
    fn test_slug_set_once() {
        let mut node = ContentNode::markdown("about.md");
        assert!(node.slug().is_none());
        node.set_slug(UrlPath::new("/about/")).unwrap();
        assert_eq!(node.slug().unwrap().as_str(), "/about/");

        let err = node.set_slug(UrlPath::new("/other/")).unwrap_err();
        assert!(matches!(err, SiteError::SlugAlreadySet(_)));
        assert_eq!(node.slug().unwrap().as_str(), "/about/");
    }

    #[test]
    fn test_template_key() {
        let mut fm = JsonMap::new();
        fm.insert(TEMPLATE_KEY.into(), json!("blog-post"));
        let node = ContentNode::markdown("a.md").with_frontmatter(fm);
        assert_eq!(node.template_key().as_deref(), Some("blog-post"));

        let mut fm = JsonMap::new();
        fm.insert(TEMPLATE_KEY.into(), json!(""));
        let node = ContentNode::markdown("b.md").with_frontmatter(fm);
        assert_eq!(node.template_key(), None);

        let mut fm = JsonMap::new();
        fm.insert(TEMPLATE_KEY.into(), json!(42));
        let node = ContentNode::markdown("c.md").with_frontmatter(fm);
        assert_eq!(node.template_key().as_deref(), Some("42"));

        let mut fm = JsonMap::new();
        fm.insert(TEMPLATE_KEY.into(), json!(["a"]));
        let node = ContentNode::markdown("d.md").with_frontmatter(fm);
        assert_eq!(node.template_key(), None);
    }
}
