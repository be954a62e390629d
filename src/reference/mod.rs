pub mod detect;
pub mod types;

pub use detect::{gallery_id, platform_for_url};
pub use types::{
    AnalysisMeta, AnalysisResult, DetectedComponent, FontSpec, LayoutInfo, OneOrMany, PaletteInfo,
    Platform, Reference, ScrapeMetadata, ScrapeResult, TypographyInfo,
};
