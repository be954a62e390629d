mod loader;
mod types;

pub use types::{
    BehanceSelectors, Config, DribbbleSelectors, OutputConfig, ScrapersConfig, VisionConfig,
};
