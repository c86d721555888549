//! Front-matter extraction from YAML (`---`) or TOML (`+++`) blocks.

use anyhow::{Context, Result};

use super::JsonMap;

/// Markdown front-matter extractor.
pub struct FrontmatterExtractor;

impl FrontmatterExtractor {
    /// Extract front-matter and return (fields, body).
    ///
    /// Returns `None` when the content has no front-matter block.
    pub fn extract<'a>(&self, content: &'a str) -> Result<Option<(JsonMap, &'a str)>> {
        match Self::detect(content) {
            Some((fm, body, is_toml)) => {
                let fields = if is_toml {
                    Self::parse_toml(fm)?
                } else {
                    Self::parse_yaml(fm)?
                };
                Ok(Some((fields, body)))
            }
            None => Ok(None),
        }
    }

    /// Split content into fields and body, treating a missing block as empty.
    pub fn split<'a>(&self, content: &'a str) -> Result<(JsonMap, &'a str)> {
        Ok(self
            .extract(content)?
            .unwrap_or_else(|| (JsonMap::new(), content)))
    }

    /// Parse YAML front-matter. An empty block yields no fields.
    fn parse_yaml(content: &str) -> Result<JsonMap> {
        if content.trim().is_empty() {
            return Ok(JsonMap::new());
        }
        serde_yaml::from_str(content).context("Invalid YAML frontmatter")
    }

    /// Parse TOML front-matter.
    fn parse_toml(content: &str) -> Result<JsonMap> {
        toml::from_str(content).context("Invalid TOML frontmatter")
    }

    /// Detect and extract front-matter.
    /// Returns `(frontmatter, body, is_toml)` if found.
    fn detect(content: &str) -> Option<(&str, &str, bool)> {
        let trimmed = content.trim_start();

        for (fence, is_toml) in [("---", false), ("+++", true)] {
            if trimmed.starts_with(fence)
                && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
            {
                let fm = trimmed[3..3 + end].trim();
                let body = trimmed[3 + end + 4..].trim_start_matches(['\r', '\n']);
                return Some((fm, body, is_toml));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntemplateKey: blog-post\ntitle: Hello\ntags: [a, b]\n---\n\n# Body";
        let (fields, body) = FrontmatterExtractor.extract(content).unwrap().unwrap();

        assert_eq!(fields["templateKey"], json!("blog-post"));
        assert_eq!(fields["title"], json!("Hello"));
        assert_eq!(fields["tags"], json!(["a", "b"]));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_yaml_comma_scalar_and_block_list() {
        let content = "---\ntitle: Mugs, cups and kettles\ngallery:\n  - /img/a.png\n  - /img/b.png\nhero:\n  src: /img/c.png\n  alt: Cup\n---\n";
        let (fields, _) = FrontmatterExtractor.split(content).unwrap();

        assert_eq!(fields["title"], json!("Mugs, cups and kettles"));
        assert_eq!(fields["gallery"], json!(["/img/a.png", "/img/b.png"]));
        assert_eq!(fields["hero"]["src"], json!("/img/c.png"));
    }

    #[test]
    fn test_yaml_scalar_types() {
        let content = "---\ncount: 42\nratio: 2.5\ndraft: false\nempty:\nquoted: \"a, b\"\n---\n";
        let (fields, _) = FrontmatterExtractor.split(content).unwrap();

        assert_eq!(fields["count"], json!(42));
        assert_eq!(fields["ratio"], json!(2.5));
        assert_eq!(fields["draft"], json!(false));
        assert_eq!(fields["empty"], json!(null));
        assert_eq!(fields["quoted"], json!("a, b"));
    }

    #[test]
    fn test_empty_yaml_block() {
        let (fields, body) = FrontmatterExtractor.split("---\n---\nBody").unwrap();
        assert!(fields.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(FrontmatterExtractor.extract("---\ntitle: [unclosed\n---\n").is_err());
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntemplateKey = \"product-page\"\noverrideSlug = \"coffee-mug\"\n+++\n\nBody";
        let (fields, body) = FrontmatterExtractor.extract(content).unwrap().unwrap();

        assert_eq!(fields["templateKey"], json!("product-page"));
        assert_eq!(fields["overrideSlug"], json!("coffee-mug"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let content = "+++\ntitle = \n+++\n";
        assert!(FrontmatterExtractor.extract(content).is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just content";
        assert!(FrontmatterExtractor.extract(content).unwrap().is_none());

        let (fields, body) = FrontmatterExtractor.split(content).unwrap();
        assert!(fields.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_value_with_colon() {
        let content = "---\nlink: https://example.com/a\n---\n";
        let (fields, _) = FrontmatterExtractor.extract(content).unwrap().unwrap();
        assert_eq!(fields["link"], json!("https://example.com/a"));
    }
}
