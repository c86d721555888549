//! Product catalog model.
//!
//! The catalog is exported as JSON: a list of entries, each holding a list
//! of products. One entry may be a placeholder (see `catalog.placeholder_id`)
//! that exists only to keep the export schema populated.
//!
//! ```json
//! [
//!   {
//!     "id": "store-main",
//!     "products": [
//!       {
//!         "handle": "mug",
//!         "alternative_id": "1001",
//!         "variants": [
//!           { "alternative_id": "2001", "title": "Blue",
//!             "selected_options": [{ "name": "Color", "value": "Blue" }] }
//!         ]
//!       }
//!     ]
//!   }
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A group of products from one catalog export node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub handle: String,
    #[serde(default)]
    pub alternative_id: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl CatalogProduct {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub alternative_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

/// Read a catalog export.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog `{}`", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("malformed catalog `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[
                {"id": "dummy"},
                {"id": "main", "products": [
                    {"handle": "mug", "variants": [
                        {"title": "Blue", "selected_options": [{"name": "Color", "value": "Blue"}]}
                    ]},
                    {"handle": "cup", "alternative_id": "42"}
                ]}
            ]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog[0].products.is_empty());
        assert_eq!(catalog[1].products[0].handle, "mug");
        assert_eq!(
            catalog[1].products[0].variants[0].selected_options[0].value,
            "Blue"
        );
        assert_eq!(catalog[1].products[1].alternative_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_malformed_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"id": "not-a-list"}"#).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("malformed catalog"));
    }
}
