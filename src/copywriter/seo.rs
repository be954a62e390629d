//! Page metadata: title, description, keyword string and heading outline.

use serde::Serialize;

use crate::brief::Brief;

/// Spain is the launch market for every generated site.
const LOCATION: &str = "España";

const INDUSTRY_KEYWORDS: [(&str, [&str; 5]); 7] = [
    (
        "tecnología",
        ["innovación", "digital", "automatización", "eficiencia", "escalabilidad"],
    ),
    (
        "fintech",
        ["seguridad", "transparencia", "rentabilidad", "inversión", "crecimiento"],
    ),
    (
        "saas",
        ["productividad", "colaboración", "optimización", "integración", "analytics"],
    ),
    (
        "ecommerce",
        ["conversión", "experiencia", "personalización", "omnicanalidad", "fidelización"],
    ),
    ("salud", ["bienestar", "prevención", "calidad", "profesionalismo", "confianza"]),
    (
        "educación",
        ["aprendizaje", "desarrollo", "conocimiento", "competencias", "futuro"],
    ),
    (
        "consultoría",
        ["estrategia", "resultados", "expertise", "transformación", "valor"],
    ),
];

const GENERIC_KEYWORDS: [&str; 5] =
    ["calidad", "experiencia", "profesional", "servicios", "soluciones"];

#[derive(Debug, Clone, Serialize)]
pub struct SeoContent {
    pub title: String,
    pub description: String,
    /// Comma-joined, ready for the meta tag.
    pub keywords: String,
    pub h1: String,
    pub h2: Vec<String>,
}

pub fn generate_seo(brief: &Brief) -> SeoContent {
    let brand = &brief.brand;
    let values = brand
        .values
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or("Calidad garantizada");

    let mut keywords: Vec<String> =
        vec![brand.industry.clone(), brand.name.to_lowercase()];
    keywords.extend(brand.target_audience.split(' ').take(2).map(str::to_string));
    keywords.extend(industry_keywords(&brand.industry).iter().map(|k| k.to_string()));
    keywords.push(LOCATION.to_lowercase());

    SeoContent {
        title: format!("{} - {} Profesional | {LOCATION}", brand.name, brand.industry),
        description: format!(
            "{}: Especialistas en {} para {}. {values}. Contacta hoy.",
            brand.name, brand.industry, brand.target_audience
        ),
        keywords: keywords.join(", "),
        h1: format!("{}: Líder en {}", brand.name, brand.industry),
        h2: vec![
            format!("Servicios de {} en {LOCATION}", brand.industry),
            format!("¿Por qué elegir {}?", brand.name),
            "Contacto y ubicación".to_string(),
            format!("Casos de éxito en {}", brand.industry),
        ],
    }
}

/// Keyword set for the first matching industry, generic terms otherwise.
pub fn industry_keywords(industry: &str) -> [&'static str; 5] {
    let needle = industry.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(key, _)| needle.contains(key))
        .map(|(_, keywords)| *keywords)
        .unwrap_or(GENERIC_KEYWORDS)
}
