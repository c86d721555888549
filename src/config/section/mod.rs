//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pagemap.toml`:
//!
//! | Module    | TOML Section    | Purpose                              |
//! |-----------|-----------------|--------------------------------------|
//! | `build`   | `[build]`       | Paths, query limit, bundler aliases  |
//! | `slug`    | `[build.slug]`  | URL segment slugification            |
//! | `catalog` | `[catalog]`     | Product catalog reconciliation       |
//! | `site`    | `[site]`        | Site info exposed to templates       |

pub mod build;
mod catalog;
mod site;
mod slug;

pub use build::BuildSectionConfig;
pub use catalog::CatalogConfig;
pub use site::SiteSectionConfig;
pub use slug::{SlugCase, SlugConfig, SlugMode, SlugSeparator};
