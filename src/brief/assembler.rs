//! Assembles the final brief from references and wizard answers.

use crate::reference::{AnalysisResult, Reference};

use super::classify::{classify_style, classify_typography};
use super::format::format_brief;
use super::palette::{consolidate_palette, resolve_primary_color};
use super::tables;
use super::types::{
    BrandColors, BrandInfo, BrandSection, Brief, BriefLayout, ContentSection, DesignSection,
    Inspiration, ProjectAnswers, ProjectKind, ProjectSection, TechnicalSection,
};

/// Builds the brief. Pure: the same inputs always produce the same brief,
/// including its formatted rendering.
pub fn build_brief(
    references: &[Reference],
    project: &ProjectAnswers,
    brand: &BrandInfo,
    port: u16,
) -> Brief {
    let primary = if brand.primary_color == "auto" || brand.primary_color.is_empty() {
        resolve_primary_color(references, &brand.industry)
    } else {
        brand.primary_color.clone()
    };

    let inspirations: Vec<Inspiration> = references
        .iter()
        .map(|r| Inspiration {
            title: r.title.clone(),
            url: r.url.clone(),
            platform: r.platform,
            key_elements: extract_key_elements(r.analysis.as_ref()),
        })
        .collect();

    let mut brief = Brief {
        project: ProjectSection {
            kind: project.kind,
            goal: project.goal.clone().unwrap_or_else(|| "general".to_string()),
            sections: project.sections.clone(),
        },
        brand: BrandSection {
            name: brand.brand_name.clone(),
            tagline: brand.tagline.clone(),
            industry: brand.industry.clone(),
            target_audience: brand.target_audience.clone(),
            values: brand.brand_values.clone(),
            tone: brand.tone,
            colors: BrandColors { primary },
            has_logo: brand.has_logo,
        },
        design: DesignSection {
            style: classify_style(references),
            inspirations,
            color_palette: consolidate_palette(references),
            typography: classify_typography(references),
            layout: determine_layout(references),
        },
        technical: TechnicalSection {
            framework: "nextjs".to_string(),
            animations: true,
            responsive: true,
            seo: true,
            performance: true,
            port,
        },
        content: ContentSection {
            language: "es".to_string(),
            tone: brand.tone,
            keywords: extract_keywords(brand),
            cta: generate_cta(project),
        },
        formatted: String::new(),
    };
    brief.formatted = format_brief(&brief);
    brief
}

/// What made a reference worth keeping, as short phrases. Failed or missing
/// analyses fall back to generic descriptors instead of leaking the error.
pub fn extract_key_elements(analysis: Option<&AnalysisResult>) -> Vec<String> {
    let Some(analysis) = analysis.filter(|a| !a.is_failed()) else {
        return vec![
            "modern layout".to_string(),
            "responsive design".to_string(),
            "clean typography".to_string(),
        ];
    };

    let mut elements: Vec<String> =
        analysis.components.iter().filter_map(|c| c.label()).map(str::to_string).collect();
    if let Some(kind) = analysis.layout.as_ref().and_then(|l| l.kind.as_deref())
        && !kind.is_empty()
    {
        elements.push(format!("{kind} layout"));
    }
    if analysis.color_palette.is_some() {
        elements.push("custom color scheme".to_string());
    }

    if elements.is_empty() {
        vec!["modern components".to_string(), "clean design".to_string()]
    } else {
        elements
    }
}

/// Layout shape across all analyses. Any grid-ish layout wins over any
/// modern-ish one; everything else is standard.
pub fn determine_layout(references: &[Reference]) -> BriefLayout {
    let kinds: Vec<&str> = references
        .iter()
        .filter_map(|r| r.analysis.as_ref())
        .filter_map(|a| a.layout.as_ref())
        .filter_map(|l| l.kind.as_deref())
        .filter(|k| !k.is_empty())
        .collect();

    let kind = if kinds.iter().any(|k| k.contains("grid")) {
        "grid"
    } else if kinds.iter().any(|k| k.contains("modern")) {
        "modern"
    } else {
        "standard"
    };

    BriefLayout {
        kind: kind.to_string(),
        columns: 12,
        responsive: true,
        max_width: "1200px".to_string(),
    }
}

/// SEO keywords: the industry verbatim, then brand values and audience split
/// on commas and whitespace, keeping tokens longer than three characters.
/// Capped at ten, in input order.
pub fn extract_keywords(brand: &BrandInfo) -> Vec<String> {
    let mut keywords = Vec::new();
    if !brand.industry.is_empty() {
        keywords.push(brand.industry.clone());
    }
    if let Some(values) = brand.brand_values.as_deref() {
        keywords.extend(split_keywords(values));
    }
    if !brand.target_audience.is_empty() {
        keywords.extend(split_keywords(&brand.target_audience));
    }
    keywords.truncate(10);
    keywords
}

fn split_keywords(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| token.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

/// Calls to action for the project shape. Landing goals hit the goal table;
/// unknown goals and websites share the generic set.
pub fn generate_cta(project: &ProjectAnswers) -> Vec<String> {
    if project.kind == ProjectKind::Landing
        && let Some(goal) = project.goal.as_deref()
        && let Some((_, ctas)) =
            tables::LANDING_GOAL_CTAS.iter().find(|(key, _)| *key == goal)
    {
        return ctas.iter().map(|c| c.to_string()).collect();
    }
    tables::WEBSITE_CTAS.iter().map(|c| c.to_string()).collect()
}
