//! Page rendering: route descriptors, templates and the static output.
//!
//! - [`RouteDescriptor`]: one planned page (path, template, context)
//! - [`PageRenderer`]: page registration capability used by the planner
//! - `registry`: template id -> tera template lookup and rendering
//! - `site`: [`StaticSite`], the renderer that writes `index.html` files

mod markdown;
mod registry;
mod site;

pub use markdown::markdown_to_html;
pub use registry::{TemplateId, TemplateRegistry};
pub use site::{RenderStats, StaticSite};

use serde::Serialize;

use crate::content::JsonMap;
use crate::core::UrlPath;

/// A planned page. Created by the planner, consumed by a renderer,
/// never mutated in between.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDescriptor {
    pub path: UrlPath,
    pub template: TemplateId,
    /// Passed to the renderer as-is.
    pub context: JsonMap,
}

impl RouteDescriptor {
    pub fn new(path: UrlPath, template: TemplateId, context: JsonMap) -> Self {
        Self {
            path,
            template,
            context,
        }
    }
}

/// Page registration capability.
pub trait PageRenderer {
    /// Register one page. Called exactly once per planned route.
    fn create_page(&mut self, page: RouteDescriptor);
}

/// Collects registered pages without rendering them.
impl PageRenderer for Vec<RouteDescriptor> {
    fn create_page(&mut self, page: RouteDescriptor) {
        self.push(page);
    }
}
