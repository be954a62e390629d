use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Boceto.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains. The brief pipeline itself never
/// surfaces errors — degraded inputs become documented defaults.
#[derive(Debug, Error)]
pub enum BocetoError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Scraping ────────────────────────────────────────────────────────
    #[error("scrape: {0}")]
    Scrape(#[from] ScrapeError),

    // ── Vision analysis ─────────────────────────────────────────────────
    #[error("vision: {0}")]
    Vision(#[from] VisionError),

    // ── Site scaffolding ────────────────────────────────────────────────
    #[error("scaffold: {0}")]
    Scaffold(#[from] ScaffoldError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Scrape errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("unsupported url: {0}")]
    UnsupportedUrl(String),

    #[error("{platform} request failed: {message}")]
    Request { platform: String, message: String },

    #[error("{platform} returned status {status}")]
    Status { platform: String, status: u16 },

    #[error("selector {selector:?} is not valid CSS")]
    Selector { selector: String },

    #[error("no images found at {url}")]
    NoImages { url: String },
}

// ─── Vision errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("image download failed: {0}")]
    Download(String),

    #[error("vision endpoint request failed: {0}")]
    Request(String),

    #[error("vision endpoint returned status {0}")]
    Status(u16),

    #[error("no JSON object in model response")]
    NoJson,
}

// ─── Scaffold errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("template {name} failed to render: {message}")]
    Render { name: String, message: String },

    #[error("output directory already exists: {0}")]
    OutputExists(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, BocetoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_correctly() {
        let err = BocetoError::Config(ConfigError::Validation("bad port".into()));
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn scrape_status_displays_platform_and_code() {
        let err = BocetoError::Scrape(ScrapeError::Status {
            platform: "behance".into(),
            status: 403,
        });
        assert!(err.to_string().contains("behance"));
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let err: BocetoError = anyhow_err.into();
        assert!(err.to_string().contains("something went wrong"));
    }

    #[test]
    fn vision_no_json_displays_correctly() {
        let err = BocetoError::Vision(VisionError::NoJson);
        assert!(err.to_string().contains("no JSON object"));
    }

    #[test]
    fn scaffold_render_displays_template_name() {
        let err = BocetoError::Scaffold(ScaffoldError::Render {
            name: "Hero.jsx".into(),
            message: "missing variable".into(),
        });
        assert!(err.to_string().contains("Hero.jsx"));
        assert!(err.to_string().contains("missing variable"));
    }
}
