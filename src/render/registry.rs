//! Template registry: template id -> tera template.
//!
//! Populated once at startup; planning only looks templates up.
//!
//! Templates are [tera](https://keats.github.io/tera/) sources. Values are
//! HTML-escaped; use `{{ content | safe }}` for rendered markdown. An
//! undefined variable is a render error.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use tera::{Context, Tera};

/// Identifier of a registered template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(Arc<str>);

impl TemplateId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name under which tera stores the template. The `.html` suffix turns
    /// on tera's autoescaping.
    fn tera_name(&self) -> String {
        format!("{}.html", self.0)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for TemplateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    tera: Tera,
    ids: FxHashSet<TemplateId>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every `*.html` file in `dir` under its file stem.
    ///
    /// `templates/blog-post.html` registers as `blog-post`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut registry = Self::new();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read templates `{}`", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read template `{}`", path.display()))?;
            registry
                .register(key, &source)
                .with_context(|| format!("invalid template `{}`", path.display()))?;
        }

        Ok(registry)
    }

    /// Parse `source` and register it under `key`, replacing any earlier one.
    pub fn register(&mut self, key: &str, source: &str) -> Result<TemplateId> {
        let id = TemplateId(Arc::from(key));
        self.tera.add_raw_template(&id.tera_name(), source)?;
        self.ids.insert(id.clone());
        Ok(id)
    }

    /// Look up the id registered for `key`.
    pub fn resolve(&self, key: &str) -> Option<TemplateId> {
        self.ids.get(key).cloned()
    }

    /// Render template `id` with `vars` (a JSON object).
    pub fn render(&self, id: &TemplateId, vars: &serde_json::Value) -> Result<String> {
        let context = Context::from_value(vars.clone())?;
        let html = self
            .tera
            .render(&id.tera_name(), &context)
            .with_context(|| format!("failed to render template `{id}`"))?;
        Ok(html)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
