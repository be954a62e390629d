use anyhow::Result;
use dialoguer::{MultiSelect, Select};

use crate::brief::{tables, ProjectAnswers, ProjectKind};

const LANDING_SECTIONS: [(&str, bool); 8] = [
    ("Hero con CTA", true),
    ("Beneficios/Features", true),
    ("Cómo funciona", true),
    ("Testimonios", false),
    ("Precios", false),
    ("FAQ", false),
    ("Equipo", false),
    ("Contacto/Formulario", true),
];

const WEBSITE_PAGES: [(&str, bool); 8] = [
    ("Inicio", true),
    ("Nosotros", true),
    ("Servicios/Productos", true),
    ("Portfolio/Casos", false),
    ("Blog", false),
    ("Contacto", true),
    ("Precios", false),
    ("Recursos", false),
];

pub fn ask_project() -> Result<ProjectAnswers> {
    let kinds = [
        "🎯 Landing Page - Una página de conversión",
        "🌐 Sitio Web Completo - Múltiples páginas",
    ];
    let kind_idx = Select::new()
        .with_prompt("  ¿Qué tipo de proyecto necesitas?")
        .items(&kinds)
        .default(0)
        .interact()?;

    if kind_idx == 0 {
        // Goal labels double as CTA lookup keys, so they come from the same
        // table the assembler reads.
        let goals: Vec<&str> = tables::LANDING_GOAL_CTAS.iter().map(|(goal, _)| *goal).collect();
        let goal_idx = Select::new()
            .with_prompt("  ¿Cuál es el objetivo principal?")
            .items(&goals)
            .default(0)
            .interact()?;

        let sections = checked_multi_select("  Selecciona las secciones que necesitas", &LANDING_SECTIONS)?;
        Ok(ProjectAnswers {
            kind: ProjectKind::Landing,
            goal: Some(goals[goal_idx].to_string()),
            sections,
        })
    } else {
        let pages = checked_multi_select("  Selecciona las páginas que necesitas", &WEBSITE_PAGES)?;
        Ok(ProjectAnswers {
            kind: ProjectKind::Website,
            goal: None,
            sections: pages,
        })
    }
}

fn checked_multi_select(prompt: &str, choices: &[(&str, bool)]) -> Result<Vec<String>> {
    let items: Vec<&str> = choices.iter().map(|(name, _)| *name).collect();
    let defaults: Vec<bool> = choices.iter().map(|(_, checked)| *checked).collect();
    let picked = MultiSelect::new()
        .with_prompt(prompt)
        .items(&items)
        .defaults(&defaults)
        .interact()?;
    Ok(picked.into_iter().map(|i| items[i].to_string()).collect())
}
