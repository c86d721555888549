//! `[site]` section: values exposed to every template as `site.*`.
//!
//! ```toml
//! [site]
//! title = "My Shop"
//! description = "Coffee gear and notes"
//! url = "https://example.com"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    /// Arbitrary user fields, available as `site.extra.*`.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SiteSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            diag.error_with_hint(
                FieldPath::new("site.url"),
                format!("`{url}` is not an absolute URL"),
                "use a full URL such as https://example.com",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_relative_url_rejected() {
        let mut config = test_parse_config("");
        config.site.url = Some("example.com".into());
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_extra_fields() {
        let config = test_parse_config("[site.extra]\ntwitter = \"@shop\"");
        assert_eq!(config.site.extra["twitter"], "@shop");
    }
}
