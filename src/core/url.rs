//! URL path type for route paths.

use std::borrow::Borrow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Route path of a page.
///
/// Invariants:
/// - Always starts with `/`
/// - Trailing slash is preserved as given (`/blog/post/` and
///   `/products/mug` are both valid routes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create a route path, adding the leading slash if missing.
    pub fn new(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }
        if trimmed.starts_with('/') {
            Self(Arc::from(trimmed))
        } else {
            Self(Arc::from(format!("/{trimmed}")))
        }
    }

    /// Get the URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if path starts with the given prefix.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Output HTML file for this route.
    ///
    /// `/blog/post/` -> `<output>/blog/post/index.html`,
    /// `/products/mug` -> `<output>/products/mug/index.html`
    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        let mut file = output_dir.to_path_buf();
        for segment in self.0.split('/').filter(|s| !s.is_empty() && *s != "..") {
            file.push(segment);
        }
        file.join("index.html")
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_adds_leading_slash() {
        assert_eq!(UrlPath::new("blog/post/").as_str(), "/blog/post/");
        assert_eq!(UrlPath::new("/products/mug").as_str(), "/products/mug");
        assert_eq!(UrlPath::new("").as_str(), "/");
    }

    #[test]
    fn test_output_file() {
        let out = Path::new("public");
        assert_eq!(
            UrlPath::new("/blog/post/").output_file(out),
            PathBuf::from("public/blog/post/index.html")
        );
        assert_eq!(
            UrlPath::new("/products/mug").output_file(out),
            PathBuf::from("public/products/mug/index.html")
        );
        assert_eq!(
            UrlPath::new("/").output_file(out),
            PathBuf::from("public/index.html")
        );
    }

    #[test]
    fn test_output_file_ignores_parent_segments() {
        let out = Path::new("public");
        assert_eq!(
            UrlPath::new("/../etc/").output_file(out),
            PathBuf::from("public/etc/index.html")
        );
    }
}
