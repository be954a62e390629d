//! Human-readable brief rendering, shown in the wizard confirmation step and
//! kept on the brief itself.

use super::types::Brief;

const BULLET: &str = "\n   • ";

/// Renders the Spanish summary block. Lists are capped at five entries so the
/// confirmation stays one screen tall.
pub fn format_brief(brief: &Brief) -> String {
    let kind = brief.project.kind.label();
    let goal = if brief.project.goal.is_empty() {
        "Presencia digital profesional"
    } else {
        &brief.project.goal
    };
    let tagline = match brief.brand.tagline.as_deref() {
        Some(tagline) if !tagline.is_empty() => format!("   \"{tagline}\""),
        _ => String::new(),
    };
    let sections = if brief.project.sections.is_empty() {
        "No especificadas".to_string()
    } else {
        brief.project.sections.join(BULLET)
    };
    let inspirations = brief
        .design
        .inspirations
        .iter()
        .map(|i| format!("{} ({})", i.title, i.platform))
        .collect::<Vec<_>>()
        .join(BULLET);
    let key_elements = brief
        .design
        .inspirations
        .iter()
        .flat_map(|i| i.key_elements.iter().cloned())
        .take(5)
        .collect::<Vec<_>>()
        .join(BULLET);
    let keywords = join_capped(&brief.content.keywords);
    let ctas = join_capped(&brief.content.cta);

    format!(
        "
📌 TIPO: {kind}
🎯 OBJETIVO: {goal}

🏢 MARCA: {name}
{tagline}
📊 INDUSTRIA: {industry}
👥 AUDIENCIA: {audience}
💬 TONO: {tone}
🎨 COLOR PRINCIPAL: {primary}

📐 SECCIONES/PÁGINAS:
   • {sections}

🎨 ESTILO VISUAL: {style}
💡 REFERENCIAS ({count}):
   • {inspirations}

🔑 ELEMENTOS CLAVE:
   • {key_elements}

⚙️ ESPECIFICACIONES TÉCNICAS:
   • Framework: Next.js 14+
   • Estilos: Tailwind CSS
   • Animaciones: Framer Motion
   • SEO: Optimizado
   • Performance: Core Web Vitals
   • Responsive: Mobile-first
   • Puerto: {port}

📝 CONTENIDO:
   • Idioma: {language}
   • Keywords SEO: {keywords}
   • CTAs sugeridos: {ctas}
",
        name = brief.brand.name,
        industry = brief.brand.industry,
        audience = brief.brand.target_audience,
        tone = brief.brand.tone,
        primary = brief.brand.colors.primary,
        style = brief.design.style,
        count = brief.design.inspirations.len(),
        port = brief.technical.port,
        language = brief.content.language,
    )
}

fn join_capped(items: &[String]) -> String {
    items.iter().take(5).cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::build_brief;
    use crate::brief::types::{BrandInfo, ProjectAnswers, ProjectKind, Tone};
    use crate::reference::{Platform, Reference};

    fn sample_brief(tagline: Option<&str>) -> Brief {
        let references = vec![
            Reference::new(
                "Modern SaaS Landing",
                "https://behance.net/gallery/1/x",
                Platform::Behance,
            )
            .with_style("Minimalista"),
        ];
        let project = ProjectAnswers {
            kind: ProjectKind::Landing,
            goal: Some("Vender un producto".into()),
            sections: vec!["Hero con CTA".into(), "Precios".into()],
        };
        let brand = BrandInfo {
            brand_name: "Nova".into(),
            tagline: tagline.map(str::to_string),
            industry: "SaaS".into(),
            target_audience: "equipos remotos".into(),
            brand_values: None,
            tone: Tone::Formal,
            primary_color: "#123456".into(),
            has_logo: false,
        };
        build_brief(&references, &project, &brand, 9200)
    }

    #[test]
    fn renders_all_headline_fields() {
        let formatted = sample_brief(Some("claridad ante todo")).formatted;
        assert!(formatted.contains("📌 TIPO: Landing Page"));
        assert!(formatted.contains("🎯 OBJETIVO: Vender un producto"));
        assert!(formatted.contains("   \"claridad ante todo\""));
        assert!(formatted.contains("💬 TONO: Profesional y formal"));
        assert!(formatted.contains("🎨 COLOR PRINCIPAL: #123456"));
        assert!(formatted.contains("   • Hero con CTA\n   • Precios"));
        assert!(formatted.contains("💡 REFERENCIAS (1):"));
        assert!(formatted.contains("Modern SaaS Landing (behance)"));
        assert!(formatted.contains("Puerto: 9200"));
    }

    #[test]
    fn missing_tagline_leaves_blank_line() {
        let formatted = sample_brief(None).formatted;
        assert!(formatted.contains("🏢 MARCA: Nova\n\n📊 INDUSTRIA: SaaS"));
    }

    #[test]
    fn empty_sections_show_placeholder() {
        let mut brief = sample_brief(None);
        brief.project.sections.clear();
        assert!(format_brief(&brief).contains("   • No especificadas"));
    }

    #[test]
    fn content_lists_cap_at_five() {
        let mut brief = sample_brief(None);
        brief.content.cta =
            (1..=8).map(|n| format!("CTA {n}")).collect();
        let formatted = format_brief(&brief);
        assert!(formatted.contains("CTA 5"));
        assert!(!formatted.contains("CTA 6"));
    }
}
