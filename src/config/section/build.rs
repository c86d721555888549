//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"       # Markdown sources (relative to site root)
//! output = "public"         # Generated HTML (relative to site root)
//! templates = "templates"   # `<templateKey>.html` files
//! static = "static"         # Static files referenced by front-matter images
//! query_limit = 1000        # Max nodes returned by the content query
//!
//! [build.slug]
//! path = "no"
//!
//! [build.alias]
//! "~components" = "src/components"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::SlugConfig;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Default cap on nodes returned by one content query.
pub const DEFAULT_QUERY_LIMIT: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory (markdown files).
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Template directory; every `*.html` file registers under its stem.
    pub templates: PathBuf,

    /// Static files directory used to resolve front-matter image paths.
    #[serde(rename = "static")]
    pub static_dir: PathBuf,

    /// Maximum number of content nodes one query returns.
    pub query_limit: usize,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// URL slugification settings.
    pub slug: SlugConfig,

    /// Bundler import aliases: alias name -> project-relative directory.
    pub alias: BTreeMap<String, PathBuf>,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            templates: "templates".into(),
            static_dir: "static".into(),
            query_limit: DEFAULT_QUERY_LIMIT,
            clean: false,
            slug: SlugConfig::default(),
            alias: default_aliases(),
        }
    }
}

fn default_aliases() -> BTreeMap<String, PathBuf> {
    [
        ("~assets", "src/assets"),
        ("~components", "src/components"),
        ("~context", "src/context"),
        ("~node_modules", "node_modules"),
        ("~scss", "src/scss"),
        ("~utils", "src/utils"),
    ]
    .into_iter()
    .map(|(alias, dir)| (alias.to_string(), PathBuf::from(dir)))
    .collect()
}

impl BuildSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.query_limit == 0 {
            diag.error(
                FieldPath::new("build.query_limit"),
                "must be greater than 0",
            );
        }
        if !self.content.is_dir() {
            diag.error_with_hint(
                FieldPath::new("build.content"),
                format!("directory `{}` not found", self.content.display()),
                "create it or point `build.content` at your markdown files",
            );
        }
        if !self.templates.is_dir() {
            diag.error(
                FieldPath::new("build.templates"),
                format!("directory `{}` not found", self.templates.display()),
            );
        }
        for (alias, dir) in &self.alias {
            if alias.is_empty() {
                diag.error(
                    FieldPath::new("build.alias"),
                    format!("empty alias name for `{}`", dir.display()),
                );
            }
        }
    }
}
