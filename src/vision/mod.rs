//! Vision-model analysis of reference images, with rule-based fallbacks for
//! when the model is offline or answers in prose.

pub mod analyzer;
pub mod fallback;
pub mod provider;

pub use analyzer::ImageAnalyzer;
pub use fallback::degraded_analysis;
pub use provider::{ANALYSIS_PROMPT, OllamaVision, VisionProvider};
