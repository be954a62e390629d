//! Next.js starter generation. Embedded Tera templates are rendered from the
//! brief plus the generated copy and written under a per-run output
//! directory. Files already on disk are never overwritten.

pub mod context;
pub mod engine;
pub mod site;

pub use context::sanitize_project_name;
pub use engine::SiteTemplates;
pub use site::{ScaffoldReport, scaffold_into, scaffold_site};
