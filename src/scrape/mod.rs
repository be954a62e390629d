//! Gallery scrapers. One static fetch per reference URL, parsed with the
//! configured selectors; no headless browser, so client-rendered values fall
//! back to stock data rather than failing the run.

pub mod behance;
pub mod dribbble;
mod html;

use std::time::Duration;

use reqwest::Client;

use crate::config::ScrapersConfig;
use crate::error::ScrapeError;
use crate::reference::{Platform, ScrapeResult, platform_for_url};

/// Scrapes whichever platform the URL belongs to.
pub async fn scrape_url(url: &str, config: &ScrapersConfig) -> Result<ScrapeResult, ScrapeError> {
    match platform_for_url(url) {
        Platform::Behance => behance::scrape(url, config).await,
        Platform::Dribbble => dribbble::scrape(url, config).await,
        Platform::None => Err(ScrapeError::UnsupportedUrl(url.to_string())),
    }
}

async fn fetch_page(
    url: &str,
    platform: Platform,
    config: &ScrapersConfig,
) -> Result<String, ScrapeError> {
    let response = page_client(config).get(url).send().await.map_err(|e| {
        ScrapeError::Request { platform: platform.to_string(), message: e.to_string() }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            platform: platform.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| ScrapeError::Request {
        platform: platform.to_string(),
        message: e.to_string(),
    })
}

fn page_client(config: &ScrapersConfig) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(&config.user_agent)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn unsupported_url_is_rejected() {
        let err = scrape_url("https://example.com/page", &ScrapersConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::UnsupportedUrl(_)));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gallery/1/x"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = fetch_page(
            &format!("{}/gallery/1/x", server.uri()),
            Platform::Behance,
            &ScrapersConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScrapeError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn page_without_images_is_no_images() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<html><body>empty</body></html>"),
            )
            .mount(&server)
            .await;

        // The parse path only cares about the body, not the real host.
        let body = fetch_page(
            &server.uri(),
            Platform::Behance,
            &ScrapersConfig::default(),
        )
        .await
        .unwrap();
        let result = behance::parse_project(&server.uri(), &body, &Default::default()).unwrap();
        assert!(result.images.is_empty());
    }
}
