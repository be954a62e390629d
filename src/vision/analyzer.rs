use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;

use crate::config::{ScrapersConfig, VisionConfig};
use crate::error::VisionError;
use crate::reference::{
    AnalysisMeta, AnalysisResult, Platform, Reference, ScrapeResult, platform_for_url,
};
use crate::scrape;

use super::fallback::degraded_analysis;
use super::provider::{OllamaVision, VisionProvider};

/// Image CDNs deny the default reqwest agent.
const DOWNLOAD_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Turns reference URLs into analyses. Infallible by contract: the only
/// failure shape it emits is the bare error marker, and only when the image
/// bytes themselves cannot be fetched.
pub struct ImageAnalyzer {
    provider: Box<dyn VisionProvider>,
    client: Client,
}

impl ImageAnalyzer {
    pub fn new(config: &VisionConfig) -> Self {
        Self::with_provider(Box::new(OllamaVision::new(config)))
    }

    pub fn with_provider(provider: Box<dyn VisionProvider>) -> Self {
        Self {
            provider,
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent(DOWNLOAD_UA)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Analyzes whatever the URL points at: a platform page gets scraped and
    /// its screenshots merged, anything else is treated as a direct image.
    pub async fn analyze_url(&self, url: &str, scrapers: &ScrapersConfig) -> AnalysisResult {
        match platform_for_url(url) {
            Platform::None => self.analyze_image(url).await,
            _ => match scrape::scrape_url(url, scrapers).await {
                Ok(project) => self.analyze_project(&project).await,
                Err(e) => {
                    tracing::warn!(url, error = %e, "scrape failed");
                    AnalysisResult::failed(e.to_string())
                }
            },
        }
    }

    /// Attaches the analysis to a freshly collected reference, along with any
    /// raw swatch colors the platform scrape reported. One-shot enrichment.
    pub async fn enrich_reference(&self, reference: &mut Reference, scrapers: &ScrapersConfig) {
        match platform_for_url(&reference.url) {
            Platform::None => {
                reference.analysis = Some(self.analyze_image(&reference.url).await);
            }
            _ => match scrape::scrape_url(&reference.url, scrapers).await {
                Ok(project) => {
                    reference.colors.clone_from(&project.colors);
                    reference.analysis = Some(self.analyze_project(&project).await);
                }
                Err(e) => {
                    tracing::warn!(url = %reference.url, error = %e, "scrape failed");
                    reference.analysis = Some(AnalysisResult::failed(e.to_string()));
                }
            },
        }
    }

    /// Per-image analyses for a scraped project, merged field-wise.
    pub async fn analyze_project(&self, project: &ScrapeResult) -> AnalysisResult {
        let mut analyses = Vec::with_capacity(project.images.len());
        for image in &project.images {
            analyses.push(self.analyze_image(image).await);
        }
        consolidate(analyses, project, self.provider.model_name())
    }

    /// One screenshot in, one analysis out. Vision trouble degrades to a
    /// stock shape; download trouble becomes the bare error marker.
    pub async fn analyze_image(&self, url: &str) -> AnalysisResult {
        let bytes = match self.download(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(url, error = %e, "image download failed");
                return AnalysisResult::failed(e.to_string());
            }
        };

        let metadata = AnalysisMeta {
            model: Some(self.provider.model_name().to_string()),
            content_type: infer::get(&bytes).map(|k| k.mime_type().to_string()),
            size_bytes: Some(bytes.len() as u64),
            ..AnalysisMeta::default()
        };

        let encoded = BASE64.encode(&bytes);
        let mut analysis = match self.provider.describe_image(&encoded).await {
            Ok(text) => parse_analysis(&text).unwrap_or_else(|| {
                tracing::debug!(url, "model response had no usable JSON");
                degraded_analysis(url)
            }),
            Err(e) => {
                tracing::warn!(url, error = %e, "vision endpoint unavailable");
                degraded_analysis(url)
            }
        };
        analysis.metadata = Some(metadata);
        analysis
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, VisionError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| VisionError::Download(e.to_string()))?;
        if !response.status().is_success() {
            return Err(VisionError::Download(format!(
                "status {}",
                response.status().as_u16()
            )));
        }
        let bytes =
            response.bytes().await.map_err(|e| VisionError::Download(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// First `{` to last `}`, decoded leniently. Model chatter around the blob is
/// fine; a blob that itself claims an error is not an analysis.
fn parse_analysis(text: &str) -> Option<AnalysisResult> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str::<AnalysisResult>(&text[start..=end])
        .ok()
        .filter(|a| !a.is_failed())
}

/// First non-empty value per field across the per-image analyses, with the
/// scrape metadata stamped on top. All images failing fails the reference.
fn consolidate(
    analyses: Vec<AnalysisResult>,
    project: &ScrapeResult,
    model: &str,
) -> AnalysisResult {
    let total = analyses.len();
    let successful: Vec<AnalysisResult> =
        analyses.into_iter().filter(|a| !a.is_failed()).collect();
    if successful.is_empty() && total > 0 {
        return AnalysisResult::failed(format!("all {total} image analyses failed"));
    }

    let mut merged = AnalysisResult::default();
    for analysis in successful {
        if merged.layout.is_none() {
            merged.layout = analysis.layout;
        }
        if merged.components.is_empty() {
            merged.components = analysis.components;
        }
        if merged.color_palette.is_none() {
            merged.color_palette = analysis.color_palette;
        }
        if merged.typography.is_none() {
            merged.typography = analysis.typography;
        }
    }
    merged.metadata = Some(AnalysisMeta {
        title: Some(project.metadata.title.clone()),
        description: Some(project.metadata.description.clone()),
        model: Some(model.to_string()),
        ..AnalysisMeta::default()
    });
    merged
}
