//! Spanish site copy derived from the brief: tone-matched section text,
//! merged calls to action and an SEO block for the page metadata.

pub mod content;
pub mod seo;

use serde::Serialize;

use crate::brief::Brief;

pub use seo::SeoContent;

/// Everything the scaffold templates need to fill their text slots.
#[derive(Debug, Clone, Serialize)]
pub struct SiteCopy {
    pub hero: HeroCopy,
    pub features: FeaturesCopy,
    pub about: AboutCopy,
    pub contact: ContactCopy,
    pub cta: Vec<String>,
    pub seo: SeoContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroCopy {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturesCopy {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutCopy {
    pub title: String,
    pub description: String,
    pub values: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactCopy {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

/// Generates the full copy set for a brief. Pure, like the brief build.
pub fn generate_copy(brief: &Brief) -> SiteCopy {
    let sections = content::sections_for(brief);
    SiteCopy {
        hero: sections.hero,
        features: sections.features,
        about: sections.about,
        contact: sections.contact,
        cta: content::merge_ctas(brief),
        seo: seo::generate_seo(brief),
    }
}
