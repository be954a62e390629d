#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod brief;
pub mod config;
pub mod copywriter;
pub mod error;
pub mod reference;
pub mod scaffold;
pub mod scrape;
pub mod ui;
pub mod vision;
pub mod wizard;

pub use config::Config;
pub use error::{BocetoError, Result};
