//! Brief consolidation: merges reference analyses with the wizard's
//! project-type and brand answers into one immutable brief.
//!
//! Everything in here is total. Missing or malformed upstream data degrades
//! to a documented default; no function in this module returns an error.

pub mod assembler;
pub mod classify;
pub mod format;
pub mod palette;
pub mod tables;
pub mod types;

pub use assembler::build_brief;
pub use classify::{classify_style, classify_typography};
pub use palette::{consolidate_palette, resolve_primary_color};
pub use types::{
    BrandColors, BrandInfo, BrandSection, Brief, BriefLayout, BriefPalette, ContentSection,
    DesignSection, FontFace, Inspiration, ProjectAnswers, ProjectKind, ProjectSection,
    TechnicalSection, Tone, TypographyChoice,
};
