use scraper::Html;

use crate::config::{BehanceSelectors, ScrapersConfig};
use crate::error::ScrapeError;
use crate::reference::{Platform, ScrapeMetadata, ScrapeResult, gallery_id};

use super::html;

const MAX_IMAGES: usize = 5;
/// Behance renders its palette client-side more often than not.
const STOCK_COLORS: [&str; 3] = ["#007bff", "#6c757d", "#28a745"];

pub async fn scrape(url: &str, config: &ScrapersConfig) -> Result<ScrapeResult, ScrapeError> {
    tracing::debug!(url, "scraping behance project");
    let body = super::fetch_page(url, Platform::Behance, config).await?;
    let result = parse_project(url, &body, &config.behance)?;
    if result.images.is_empty() {
        return Err(ScrapeError::NoImages { url: url.to_string() });
    }
    Ok(result)
}

/// Pulls images, metadata and swatches out of a project page. Configured
/// selectors first, generic fallbacks when the markup has moved.
pub fn parse_project(
    url: &str,
    body: &str,
    selectors: &BehanceSelectors,
) -> Result<ScrapeResult, ScrapeError> {
    let document = Html::parse_document(body);

    let mut images = html::select_images(&document, &selectors.project_images)?;
    if images.is_empty() {
        images = html::fallback_images(&document, &["behance", "project"]);
    }
    images.truncate(MAX_IMAGES);

    let title = html::select_text(&document, &selectors.title)?
        .or_else(|| html::document_title(&document))
        .unwrap_or_else(|| fallback_title(url));

    let description = html::select_text(&document, &selectors.description)?
        .or_else(|| html::meta_description(&document))
        .unwrap_or_else(|| "Design project from Behance".to_string());

    let tags = html::select_texts(&document, &selectors.tags)?;

    let mut colors = html::select_colors(&document, &selectors.colors)?;
    if colors.is_empty() {
        colors = STOCK_COLORS.iter().map(|c| c.to_string()).collect();
    }

    Ok(ScrapeResult {
        platform: Platform::Behance,
        url: url.to_string(),
        images,
        metadata: ScrapeMetadata { title, description, tags },
        colors,
    })
}

fn fallback_title(url: &str) -> String {
    match gallery_id(url) {
        Some(id) => format!("Behance Project {id}"),
        None => "Behance Project".to_string(),
    }
}
