use serde::{Deserialize, Serialize};
use strum::Display;

use crate::reference::Platform;

// ─── Wizard Answers ─────────────────────────────────────────────────────────

/// What the user wants to ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Landing,
    Website,
}

impl ProjectKind {
    /// Human label used in the rendered brief.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Landing => "Landing Page",
            Self::Website => "Sitio Web",
        }
    }
}

/// Voice the generated copy speaks in. Serialized with the exact labels the
/// wizard shows so saved briefs stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[strum(serialize = "Profesional y formal")]
    #[serde(rename = "Profesional y formal")]
    Formal,
    #[strum(serialize = "Amigable y cercano")]
    #[serde(rename = "Amigable y cercano")]
    Friendly,
    #[strum(serialize = "Innovador y disruptivo")]
    #[serde(rename = "Innovador y disruptivo")]
    Innovative,
    #[strum(serialize = "Elegante y sofisticado")]
    #[serde(rename = "Elegante y sofisticado")]
    Elegant,
    #[strum(serialize = "Juvenil y dinámico")]
    #[serde(rename = "Juvenil y dinámico")]
    Playful,
    #[strum(serialize = "Técnico y especializado")]
    #[serde(rename = "Técnico y especializado")]
    Technical,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Formal,
        Tone::Friendly,
        Tone::Innovative,
        Tone::Elegant,
        Tone::Playful,
        Tone::Technical,
    ];
}

/// Project-shape answers collected before the brand step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAnswers {
    pub kind: ProjectKind,
    /// Landing goal, verbatim wizard option. `None` for full websites.
    pub goal: Option<String>,
    /// Chosen sections (landing) or pages (website), in menu order.
    pub sections: Vec<String>,
}

/// Brand identity answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandInfo {
    pub brand_name: String,
    pub tagline: Option<String>,
    pub industry: String,
    pub target_audience: String,
    pub brand_values: Option<String>,
    pub tone: Tone,
    /// Hex color or the literal `"auto"` to derive from references.
    pub primary_color: String,
    pub has_logo: bool,
}

// ─── Brief ──────────────────────────────────────────────────────────────────

/// The consolidated brief. Built once by [`build_brief`] and treated as
/// read-only afterwards; rebuilding from the same inputs yields an identical
/// value.
///
/// [`build_brief`]: crate::brief::build_brief
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    pub project: ProjectSection,
    pub brand: BrandSection,
    pub design: DesignSection,
    pub technical: TechnicalSection,
    pub content: ContentSection,
    /// Human-readable rendering of the fields above, shown for confirmation.
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub goal: String,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSection {
    pub name: String,
    pub tagline: Option<String>,
    pub industry: String,
    pub target_audience: String,
    pub values: Option<String>,
    pub tone: Tone,
    pub colors: BrandColors,
    pub has_logo: bool,
}

/// Brand-channel colors. Distinct from [`BriefPalette`]: this one honors the
/// explicit wizard answer, the palette is consolidated from references only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSection {
    pub style: String,
    pub inspirations: Vec<Inspiration>,
    pub color_palette: BriefPalette,
    pub typography: TypographyChoice,
    pub layout: BriefLayout,
}

/// One reference, reduced to what the scaffold step cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspiration {
    pub title: String,
    pub url: String,
    pub platform: Platform,
    pub key_elements: Vec<String>,
}

/// Always fully populated; consolidation fills gaps with stock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub gradients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyChoice {
    pub headings: FontFace,
    pub body: FontFace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFace {
    pub family: String,
    pub weight: String,
}

impl FontFace {
    pub fn new(family: &str, weight: &str) -> Self {
        Self { family: family.to_string(), weight: weight.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefLayout {
    #[serde(rename = "type")]
    pub kind: String,
    pub columns: u8,
    pub responsive: bool,
    pub max_width: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSection {
    pub framework: String,
    pub animations: bool,
    pub responsive: bool,
    pub seo: bool,
    pub performance: bool,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub language: String,
    pub tone: Tone,
    pub keywords: Vec<String>,
    pub cta: Vec<String>,
}
