mod brand;
mod inspiration;
mod project;

pub use brand::ask_brand;
pub use inspiration::{collect_references, STYLE_CHOICES};
pub use project::ask_project;
