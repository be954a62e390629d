use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub scrapers: ScrapersConfig,

    #[serde(default)]
    pub vision: VisionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapersConfig {
    /// Sent on every gallery request; some galleries block the default
    /// reqwest agent outright.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_scrape_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub behance: BehanceSelectors,
    #[serde(default)]
    pub dribbble: DribbbleSelectors,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".into()
}

fn default_scrape_timeout() -> u64 {
    30
}

impl Default for ScrapersConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_scrape_timeout(),
            behance: BehanceSelectors::default(),
            dribbble: DribbbleSelectors::default(),
        }
    }
}

/// CSS selectors for Behance project pages. Overridable because gallery
/// markup changes more often than releases ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehanceSelectors {
    #[serde(default = "default_behance_images")]
    pub project_images: String,
    #[serde(default = "default_behance_title")]
    pub title: String,
    #[serde(default = "default_behance_description")]
    pub description: String,
    #[serde(default = "default_behance_colors")]
    pub colors: String,
    #[serde(default = "default_behance_tags")]
    pub tags: String,
}

fn default_behance_images() -> String {
    "img[srcset*='project_modules']".into()
}

fn default_behance_title() -> String {
    "h1.ProjectInfo-projectTitle".into()
}

fn default_behance_description() -> String {
    ".ProjectInfo-projectDescription".into()
}

fn default_behance_colors() -> String {
    ".ProjectColors-color".into()
}

fn default_behance_tags() -> String {
    ".ProjectTags-tag".into()
}

impl Default for BehanceSelectors {
    fn default() -> Self {
        Self {
            project_images: default_behance_images(),
            title: default_behance_title(),
            description: default_behance_description(),
            colors: default_behance_colors(),
            tags: default_behance_tags(),
        }
    }
}

/// CSS selectors for Dribbble shot pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DribbbleSelectors {
    #[serde(default = "default_dribbble_image")]
    pub shot_image: String,
    #[serde(default = "default_dribbble_title")]
    pub title: String,
    #[serde(default = "default_dribbble_description")]
    pub description: String,
    #[serde(default = "default_dribbble_palette")]
    pub color_palette: String,
    #[serde(default = "default_dribbble_tags")]
    pub tags: String,
}

fn default_dribbble_image() -> String {
    "picture.shot-thumbnail-base img".into()
}

fn default_dribbble_title() -> String {
    "h1.shot-title".into()
}

fn default_dribbble_description() -> String {
    ".shot-description".into()
}

fn default_dribbble_palette() -> String {
    ".color-swatch".into()
}

fn default_dribbble_tags() -> String {
    ".shot-tags-list a".into()
}

impl Default for DribbbleSelectors {
    fn default() -> Self {
        Self {
            shot_image: default_dribbble_image(),
            title: default_dribbble_title(),
            description: default_dribbble_description(),
            color_palette: default_dribbble_palette(),
            tags: default_dribbble_tags(),
        }
    }
}

/// Vision model endpoint, Ollama-compatible. `MCP_ENDPOINT` and `MCP_MODEL`
/// environment variables override the file values at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    #[serde(default = "default_vision_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_vision_model")]
    pub model: String,
    #[serde(default = "default_vision_timeout")]
    pub timeout_secs: u64,
}

fn default_vision_endpoint() -> String {
    "http://localhost:11434".into()
}

fn default_vision_model() -> String {
    "llava:latest".into()
}

fn default_vision_timeout() -> u64 {
    30
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_vision_endpoint(),
            model: default_vision_model(),
            timeout_secs: default_vision_timeout(),
        }
    }
}

/// Where generated sites land and which dev port they claim. `PORT`
/// overrides the port at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Relative to the working directory unless absolute; `~` expands.
    #[serde(default = "default_output_root")]
    pub root: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_output_root() -> String {
    "outputs/builds".into()
}

fn default_port() -> u16 {
    9200
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { root: default_output_root(), port: default_port() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_platforms() {
        let config = Config::default();
        assert!(config.scrapers.behance.project_images.contains("project_modules"));
        assert_eq!(config.scrapers.dribbble.title, "h1.shot-title");
        assert_eq!(config.vision.endpoint, "http://localhost:11434");
        assert_eq!(config.output.port, 9200);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let config: Config = toml::from_str(
            r#"
[vision]
model = "llava:13b"
"#,
        )
        .unwrap();
        assert_eq!(config.vision.model, "llava:13b");
        assert_eq!(config.vision.endpoint, "http://localhost:11434");
        assert_eq!(config.output.root, "outputs/builds");
        assert_eq!(config.scrapers.timeout_secs, 30);
    }

    #[test]
    fn selector_override_survives_round_trip() {
        let mut config = Config::default();
        config.scrapers.behance.title = "h1.NewTitle".into();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(back.scrapers.behance.title, "h1.NewTitle");
        assert_eq!(back.scrapers.behance.tags, ".ProjectTags-tag");
    }
}
