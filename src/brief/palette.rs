//! Color resolution for the two brief channels: the single brand primary and
//! the consolidated design palette.

use crate::reference::{PaletteInfo, Reference};

use super::tables;
use super::types::BriefPalette;

/// Picks the brand primary from reference colors, preferring the vision
/// analysis over scraped swatches. Falls back to the industry table, then to
/// the stock blue, so the result is never empty.
pub fn resolve_primary_color(references: &[Reference], industry: &str) -> String {
    let mut candidates: Vec<&str> = Vec::new();
    for reference in references {
        if let Some(primary) = palette_of(reference).and_then(|p| p.primary.as_deref()) {
            candidates.push(primary);
        }
        candidates.extend(reference.colors.iter().take(2).map(String::as_str));
    }
    candidates
        .into_iter()
        .find(|c| looks_like_color(c))
        .map(str::to_string)
        .unwrap_or_else(|| industry_default_color(industry).to_string())
}

/// Industry keyword lookup, first substring match wins.
pub fn industry_default_color(industry: &str) -> &'static str {
    let needle = industry.to_lowercase();
    tables::INDUSTRY_COLORS
        .iter()
        .find(|(key, _)| needle.contains(key))
        .map(|(_, hex)| *hex)
        .unwrap_or(tables::DEFAULT_PRIMARY)
}

/// Merges every analyzed palette into one, taking the first non-empty value
/// per slot and filling the rest with stock colors.
pub fn consolidate_palette(references: &[Reference]) -> BriefPalette {
    let mut primary: Option<String> = None;
    let mut secondary: Option<String> = None;
    let mut accents: Vec<String> = Vec::new();

    for palette in references.iter().filter_map(palette_of) {
        if primary.is_none()
            && let Some(value) = palette.primary.as_ref().filter(|v| !v.is_empty())
        {
            primary = Some(value.clone());
        }
        if secondary.is_none()
            && let Some(value) = palette.secondary.as_ref().filter(|v| !v.is_empty())
        {
            secondary = Some(value.clone());
        }
        if let Some(accent) = &palette.accent {
            accents.extend(accent.values().into_iter().map(str::to_string));
        }
    }

    BriefPalette {
        primary: primary.unwrap_or_else(|| tables::DEFAULT_PRIMARY.to_string()),
        secondary: secondary.unwrap_or_else(|| tables::DEFAULT_SECONDARY.to_string()),
        accent: accents
            .into_iter()
            .next()
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| tables::DEFAULT_ACCENT.to_string()),
        gradients: tables::GRADIENTS.iter().map(|g| g.to_string()).collect(),
    }
}

fn palette_of(reference: &Reference) -> Option<&PaletteInfo> {
    reference.analysis.as_ref().and_then(|a| a.color_palette.as_ref())
}

fn looks_like_color(value: &str) -> bool {
    value.starts_with('#') || value.starts_with("rgb")
}
