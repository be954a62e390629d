//! Interactive project wizard: collects references, project shape and brand
//! answers, confirms the consolidated brief and generates the starter site.

pub mod flow;
pub mod prompts;
pub mod view;

pub use flow::run_wizard;
