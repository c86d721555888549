//! `[catalog]` section: product catalog reconciliation.
//!
//! When enabled, pages are planned by reconciling catalog products with
//! markdown overrides instead of mapping every markdown node directly.
//!
//! ```toml
//! [catalog]
//! enable = true
//! source = "catalog.json"     # Catalog export (relative to site root)
//! placeholder_id = "dummy"    # Entry id that is never turned into pages
//! prefix = "products"         # Product routes live under /products/
//! template = "product-page"   # Template used for every product page
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub enable: bool,
    pub source: PathBuf,
    pub placeholder_id: String,
    pub prefix: String,
    pub template: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enable: false,
            source: "catalog.json".into(),
            placeholder_id: "dummy".into(),
            prefix: "products".into(),
            template: "product-page".into(),
        }
    }
}

impl CatalogConfig {
    /// Route prefix with surrounding slashes, e.g. `/products/`.
    pub fn route_prefix(&self) -> String {
        format!("/{}/", self.prefix.trim_matches('/'))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        if !self.source.is_file() {
            diag.error_with_hint(
                FieldPath::new("catalog.source"),
                format!("file `{}` not found", self.source.display()),
                "export the catalog as JSON or set `catalog.enable = false`",
            );
        }
        if self.prefix.trim_matches('/').is_empty() {
            diag.error(FieldPath::new("catalog.prefix"), "must not be empty");
        }
        if self.template.is_empty() {
            diag.error(FieldPath::new("catalog.template"), "must not be empty");
        }
    }
}
