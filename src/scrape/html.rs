//! Selector helpers shared by the platform scrapers.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|_| ScrapeError::Selector { selector: selector.to_string() })
}

/// First matched element's text, whitespace-normalized. `None` when nothing
/// matches or the match is empty.
pub fn select_text(document: &Html, selector: &str) -> Result<Option<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    Ok(document.select(&sel).next().and_then(element_text))
}

/// Every matched element's text, empties dropped.
pub fn select_texts(document: &Html, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    Ok(document.select(&sel).filter_map(element_text).collect())
}

/// Image URLs from the matched elements: `src`, or the first `srcset`
/// candidate when `src` is missing.
pub fn select_images(document: &Html, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    Ok(document.select(&sel).filter_map(image_url).collect())
}

/// All `<img>` sources whose URL contains any of the needles, in document
/// order. The last resort when the configured selector matches nothing.
pub fn fallback_images(document: &Html, needles: &[&str]) -> Vec<String> {
    let Ok(sel) = Selector::parse("img") else {
        return Vec::new();
    };
    document
        .select(&sel)
        .filter_map(image_url)
        .filter(|src| needles.iter().any(|needle| src.contains(needle)))
        .collect()
}

/// Swatch color from a matched element: the inline `background-color`, or the
/// element text when it already reads as a color.
pub fn select_colors(document: &Html, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    Ok(document.select(&sel).filter_map(swatch_color).collect())
}

pub fn document_title(document: &Html) -> Option<String> {
    select_text(document, "title").ok().flatten()
}

pub fn meta_description(document: &Html) -> Option<String> {
    let sel = Selector::parse("meta[name='description']").ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text: String = element.text().collect::<Vec<_>>().join(" ");
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() { None } else { Some(normalized) }
}

fn image_url(element: ElementRef<'_>) -> Option<String> {
    if let Some(src) = element.value().attr("src").filter(|s| !s.is_empty()) {
        return Some(src.to_string());
    }
    let srcset = element.value().attr("srcset")?;
    srcset.split_whitespace().next().map(str::to_string)
}

fn swatch_color(element: ElementRef<'_>) -> Option<String> {
    if let Some(style) = element.value().attr("style")
        && let Some(idx) = style.find("background-color:")
    {
        let value = style[idx + "background-color:".len()..]
            .split(';')
            .next()
            .map(str::trim)
            .unwrap_or_default();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    element_text(element).filter(|t| t.starts_with('#') || t.starts_with("rgb"))
}
