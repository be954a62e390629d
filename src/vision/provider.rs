use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::VisionConfig;
use crate::error::VisionError;

/// The instruction sent with every screenshot. Spanish, JSON-only, matching
/// the language of everything else the tool emits.
pub const ANALYSIS_PROMPT: &str = "Analiza esta imagen de diseño web y extrae información estructurada en JSON:

1. Layout y estructura (header, hero, sections, footer)
2. Componentes UI (botones, cards, formularios, navegación)
3. Paleta de colores predominantes (hexadecimales)
4. Tipografía (estilos identificables)
5. Elementos de diseño (espaciado, alineación)
6. Elementos interactivos

Responde SOLO con JSON válido, sin texto adicional.";

/// A model that can look at one screenshot and describe it as text.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    async fn describe_image(&self, base64_image: &str) -> Result<String, VisionError>;

    fn model_name(&self) -> &str;
}

/// Ollama-compatible vision endpoint (LLaVA and friends).
pub struct OllamaVision {
    base_url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: &'static str,
    images: Vec<String>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaVision {
    pub fn new(config: &VisionConfig) -> Self {
        Self {
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

#[async_trait]
impl VisionProvider for OllamaVision {
    async fn describe_image(&self, base64_image: &str) -> Result<String, VisionError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: ANALYSIS_PROMPT,
            images: vec![base64_image.to_string()],
            stream: false,
        };
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| VisionError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VisionError::Status(response.status().as_u16()));
        }

        let body: GenerateResponse =
            response.json().await.map_err(|e| VisionError::Request(e.to_string()))?;
        Ok(body.response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
