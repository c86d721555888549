//! Site mapping core.
//!
//! - `slug`: content-relative path -> URL slug
//! - `planner`: content nodes -> route descriptors
//! - `reconcile`: catalog products + markdown overrides -> product routes
//! - `hooks`: lifecycle hooks called by the build driver ([`SiteMapper`])

mod error;
mod hooks;
mod planner;
mod reconcile;
mod slug;

pub use error::SiteError;
pub use hooks::{SiteHooks, SiteMapper};
pub use planner::{plan_page, plan_pages};
pub use reconcile::plan_catalog_pages;
pub use slug::derive_slug;
