use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::reference::{platform_for_url, Platform, Reference};
use crate::ui::style as ui;

use super::super::view::{print_bullet, print_reference};

/// Visual styles offered at intake. Free text downstream: the style
/// classifier substring-matches whatever tag ends up on the reference.
pub const STYLE_CHOICES: [&str; 7] = [
    "Minimalista",
    "Moderno/Tech",
    "Corporativo",
    "Creativo/Artístico",
    "E-commerce",
    "Startup",
    "Elegante/Luxury",
];

/// Curated trend picks shown in trend mode: title, url, platform, tag,
/// relevance. The tag is display-only and never lands on the reference.
const TRENDS: [(&str, &str, Platform, &str, f32); 3] = [
    (
        "Glassmorphism UI Kit",
        "https://www.behance.net/gallery/210000001/Glassmorphism-UI",
        Platform::Behance,
        "Glassmorphism",
        0.92,
    ),
    (
        "Brutalist Web Design",
        "https://dribbble.com/shots/24000001-Brutalist-Landing",
        Platform::Dribbble,
        "Brutalism",
        0.85,
    ),
    (
        "Y2K Revival Interface",
        "https://www.behance.net/gallery/209000001/Y2K-Web-Design",
        Platform::Behance,
        "Y2K Revival",
        0.88,
    ),
];

/// Runs the inspiration intake until at least one reference is collected.
/// Rejecting a suggestion set loops back to the mode menu.
pub fn collect_references() -> Result<Vec<Reference>> {
    let modes = [
        "🔍 Buscar por categoría/estilo",
        "🔗 Tengo URLs específicas",
        "🎨 Ver tendencias actuales",
        "⚡ Sugerir automáticamente",
    ];

    loop {
        let mode = Select::new()
            .with_prompt("  ¿Cómo quieres buscar inspiración?")
            .items(&modes)
            .default(0)
            .interact()?;

        let references = match mode {
            0 => search_by_style()?,
            1 => ask_urls()?,
            2 => pick_trends()?,
            _ => auto_suggest(),
        };

        if !references.is_empty() {
            return Ok(references);
        }
    }
}

fn search_by_style() -> Result<Vec<Reference>> {
    let keywords: String = Input::new()
        .with_prompt("  Palabras clave (ej: \"fintech modern\", \"saas minimal\")")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Ingresa al menos una palabra clave")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let style_idx = Select::new()
        .with_prompt("  Estilo visual preferido")
        .items(&STYLE_CHOICES)
        .default(0)
        .interact()?;
    let chosen_style = STYLE_CHOICES[style_idx];
    tracing::debug!(keywords, style = chosen_style, "inspiration search");

    // Curated picks tagged with the chosen style; a live gallery search can
    // slot in here without touching the rest of the flow.
    let references = vec![
        Reference::new(
            "Modern SaaS Landing",
            "https://www.behance.net/gallery/206929319/Zentry-Landing-Page",
            Platform::Behance,
        )
        .with_style(chosen_style)
        .with_relevance(0.95),
        Reference::new(
            "Tech Startup Design",
            "https://dribbble.com/shots/23265919-Saas-Landing-Page",
            Platform::Dribbble,
        )
        .with_style(chosen_style)
        .with_relevance(0.88),
    ];

    println!();
    print_bullet("Referencias encontradas:");
    println!();
    for (i, reference) in references.iter().enumerate() {
        print_reference(i, reference);
    }

    let confirmed = Confirm::new()
        .with_prompt("  ¿Usar estas referencias?")
        .default(true)
        .interact()?;

    Ok(if confirmed { references } else { Vec::new() })
}

fn ask_urls() -> Result<Vec<Reference>> {
    let mut references: Vec<Reference> = Vec::new();

    loop {
        let collected = references.len();
        let url: String = Input::new()
            .with_prompt(format!("  URL de referencia {} (Behance/Dribbble)", collected + 1))
            .allow_empty(true)
            .validate_with(move |input: &String| {
                if input.trim().is_empty() {
                    if collected > 0 {
                        Ok(())
                    } else {
                        Err("Ingresa al menos una URL")
                    }
                } else if input.contains("behance.net") || input.contains("dribbble.com") {
                    Ok(())
                } else {
                    Err("Por favor ingresa una URL válida de Behance o Dribbble")
                }
            })
            .interact_text()?;

        if url.trim().is_empty() {
            break;
        }

        let platform = platform_for_url(&url);
        references.push(
            Reference::new(format!("Referencia {}", collected + 1), url.trim(), platform)
                .with_relevance(1.0),
        );

        let add_more = Confirm::new()
            .with_prompt("  ¿Agregar otra URL?")
            .default(false)
            .interact()?;
        if !add_more {
            break;
        }
    }

    Ok(references)
}

fn pick_trends() -> Result<Vec<Reference>> {
    println!();
    print_bullet("Tendencias de diseño actuales:");
    println!();
    for (i, (title, url, _, tag, relevance)) in TRENDS.iter().enumerate() {
        let stars = "★".repeat((relevance * 5.0).round() as usize);
        println!("  {}. {} {}", i + 1, ui::header(title), ui::dim(format!("({tag})")));
        println!("     {}", ui::url(url));
        println!("     Popularidad: {}", ui::yellow(stars));
        println!();
    }

    let labels: Vec<String> = TRENDS
        .iter()
        .map(|(title, _, _, tag, _)| format!("{title} ({tag})"))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("  Selecciona las tendencias que te interesan")
        .items(&labels)
        .interact()?;

    if picked.is_empty() {
        print_bullet("Selecciona al menos una tendencia.");
        return Ok(Vec::new());
    }

    Ok(picked
        .into_iter()
        .map(|i| {
            let (title, url, platform, _, relevance) = TRENDS[i];
            Reference::new(title, url, platform).with_relevance(relevance)
        })
        .collect())
}

fn auto_suggest() -> Vec<Reference> {
    let references = vec![
        Reference::new(
            "Modern Minimalist Landing",
            "https://www.behance.net/gallery/200000001/Minimal-Landing",
            Platform::Behance,
        )
        .with_style("Minimalista")
        .with_relevance(0.90),
        Reference::new(
            "SaaS Dashboard Design",
            "https://dribbble.com/shots/22000001-SaaS-Dashboard",
            Platform::Dribbble,
        )
        .with_style("Moderno/Tech")
        .with_relevance(0.87),
    ];

    println!();
    print_bullet("Referencias seleccionadas automáticamente:");
    println!();
    for (i, reference) in references.iter().enumerate() {
        print_reference(i, reference);
    }

    references
}
