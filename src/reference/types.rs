use serde::{Deserialize, Serialize};
use strum::Display;

/// Design-portfolio platform a reference comes from. `None` means a direct
/// image URL with no known platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Behance,
    Dribbble,
    #[default]
    None,
}

/// One design-inspiration source. Created at intake, enriched exactly once
/// with an analysis, never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub platform: Platform,
    /// Free-text style tag chosen at intake (e.g. "Minimalista").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Search relevance in `[0, 1]`.
    #[serde(default)]
    pub relevance: f32,
    /// Raw colors the platform scrape reported, unvalidated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
}

impl Reference {
    pub fn new(title: impl Into<String>, url: impl Into<String>, platform: Platform) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            platform,
            style: None,
            relevance: 0.0,
            colors: Vec::new(),
            analysis: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_relevance(mut self, relevance: f32) -> Self {
        self.relevance = relevance;
        self
    }
}

/// Structured extraction for a single design. Every field is best-effort:
/// a result either carries `error` (bare degraded marker) or some subset of
/// the structural fields, never an error plus a complete palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<DetectedComponent>,
    #[serde(alias = "colorPalette", alias = "colors", skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<PaletteInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnalysisMeta>,
}

impl AnalysisResult {
    /// Bare degraded marker: the analysis could not be obtained at all.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutInfo {
    /// e.g. "modern-grid", "crypto-landing", "corporate".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<String>,
}

/// A UI element the analyzer spotted. Heterogeneous by kind; fields beyond
/// the label are whatever the model happened to report and are not
/// cross-validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedComponent {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl DetectedComponent {
    pub fn named(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Kind when present and non-empty, else name. Matches how the brief
    /// assembler labels components.
    pub fn label(&self) -> Option<&str> {
        self.kind
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Loosely typed palette from an analysis. Values are hex-like strings or
/// free text; nothing is validated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Models report this sometimes as one string, sometimes as a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<OneOrMany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// A field that external JSON supplies as either a single string or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Flattened view, list order preserved.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::One(v) => vec![v.as_str()],
            Self::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<FontSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FontSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl FontSpec {
    pub fn new(family: &str, weight: &str) -> Self {
        Self {
            family: Some(family.to_string()),
            weight: Some(weight.to_string()),
        }
    }
}

/// Where an analysis came from and what the payload looked like.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// What a platform scrape yields before any vision analysis runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub platform: Platform,
    pub url: String,
    pub images: Vec<String>,
    pub metadata: ScrapeMetadata,
    /// Swatch colors as reported by the page, or the platform's stock
    /// palette when none are found.
    pub colors: Vec<String>,
}

/// Always fully populated; the scrapers substitute platform defaults for
/// anything the page does not expose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_displays_lowercase() {
        assert_eq!(Platform::Behance.to_string(), "behance");
        assert_eq!(Platform::Dribbble.to_string(), "dribbble");
        assert_eq!(Platform::None.to_string(), "none");
    }

    #[test]
    fn analysis_deserializes_camel_case_palette() {
        let json = r##"{"colorPalette":{"primary":"#112233","accent":["#445566","#778899"]}}"##;
        let analysis: AnalysisResult = serde_json::from_str(json).unwrap();
        let palette = analysis.color_palette.unwrap();
        assert_eq!(palette.primary.as_deref(), Some("#112233"));
        assert_eq!(
            palette.accent.unwrap().values(),
            vec!["#445566", "#778899"]
        );
    }

    #[test]
    fn accent_accepts_single_string() {
        let json = r##"{"color_palette":{"accent":"#10B981"}}"##;
        let analysis: AnalysisResult = serde_json::from_str(json).unwrap();
        let accent = analysis.color_palette.unwrap().accent.unwrap();
        assert_eq!(accent.values(), vec!["#10B981"]);
    }

    #[test]
    fn component_label_prefers_kind_over_name() {
        let c = DetectedComponent {
            kind: Some("hero".into()),
            name: Some("Main hero".into()),
            ..DetectedComponent::default()
        };
        assert_eq!(c.label(), Some("hero"));
    }

    #[test]
    fn component_label_falls_back_to_name() {
        let c = DetectedComponent {
            kind: Some(String::new()),
            name: Some("navbar".into()),
            ..DetectedComponent::default()
        };
        assert_eq!(c.label(), Some("navbar"));
    }

    #[test]
    fn component_label_absent_when_both_empty() {
        let c = DetectedComponent::default();
        assert_eq!(c.label(), None);
    }

    #[test]
    fn layout_kind_deserializes_from_type_key() {
        let json = r#"{"layout":{"type":"modern-grid","sections":["hero","footer"]}}"#;
        let analysis: AnalysisResult = serde_json::from_str(json).unwrap();
        let layout = analysis.layout.unwrap();
        assert_eq!(layout.kind.as_deref(), Some("modern-grid"));
        assert_eq!(layout.sections, vec!["hero", "footer"]);
    }

    #[test]
    fn failed_marker_has_no_structural_fields() {
        let a = AnalysisResult::failed("timeout");
        assert!(a.is_failed());
        assert!(a.layout.is_none());
        assert!(a.components.is_empty());
        assert!(a.color_palette.is_none());
    }

    #[test]
    fn lenient_decode_ignores_unknown_fields() {
        let json = r#"{"layout":{"type":"grid"},"spacing":{"padding":"responsive"},"interactions":{}}"#;
        let analysis: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.layout.unwrap().kind.as_deref(), Some("grid"));
    }
}
