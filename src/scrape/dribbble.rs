use scraper::Html;

use crate::config::{DribbbleSelectors, ScrapersConfig};
use crate::error::ScrapeError;
use crate::reference::{Platform, ScrapeMetadata, ScrapeResult, gallery_id};

use super::html;

const MAX_IMAGES: usize = 3;
const STOCK_COLORS: [&str; 3] = ["#ea4c89", "#0d0c22", "#7c3aed"];

pub async fn scrape(url: &str, config: &ScrapersConfig) -> Result<ScrapeResult, ScrapeError> {
    tracing::debug!(url, "scraping dribbble shot");
    let body = super::fetch_page(url, Platform::Dribbble, config).await?;
    let result = parse_shot(url, &body, &config.dribbble)?;
    if result.images.is_empty() {
        return Err(ScrapeError::NoImages { url: url.to_string() });
    }
    Ok(result)
}

pub fn parse_shot(
    url: &str,
    body: &str,
    selectors: &DribbbleSelectors,
) -> Result<ScrapeResult, ScrapeError> {
    let document = Html::parse_document(body);

    let mut images = html::select_images(&document, &selectors.shot_image)?;
    if images.is_empty() {
        images = html::fallback_images(&document, &["dribbble", "shot"]);
    }
    images.truncate(MAX_IMAGES);

    let title = html::select_text(&document, &selectors.title)?
        .or_else(|| html::document_title(&document))
        .unwrap_or_else(|| fallback_title(url));

    let description = html::select_text(&document, &selectors.description)?
        .or_else(|| html::meta_description(&document))
        .unwrap_or_else(|| "Design shot from Dribbble".to_string());

    let tags = html::select_texts(&document, &selectors.tags)?;

    let mut colors = html::select_colors(&document, &selectors.color_palette)?;
    if colors.is_empty() {
        colors = STOCK_COLORS.iter().map(|c| c.to_string()).collect();
    }

    Ok(ScrapeResult {
        platform: Platform::Dribbble,
        url: url.to_string(),
        images,
        metadata: ScrapeMetadata { title, description, tags },
        colors,
    })
}

/// Untitled shots are named by their numeric id so two of them stay apart
/// in the reference list.
fn fallback_title(url: &str) -> String {
    match gallery_id(url) {
        Some(id) => format!("Dribbble Shot {id}"),
        None => "Dribbble Shot".to_string(),
    }
}
