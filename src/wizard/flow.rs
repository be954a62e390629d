use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Confirm;

use crate::brief::{build_brief, BrandInfo, Brief, ProjectAnswers};
use crate::config::Config;
use crate::copywriter::generate_copy;
use crate::reference::Reference;
use crate::scaffold::scaffold_site;
use crate::ui::style as ui;
use crate::vision::ImageAnalyzer;

use super::prompts::{ask_brand, ask_project, collect_references};
use super::view;

/// The interactive flow: inspiración → proyecto → marca → resumen → sitio.
pub async fn run_wizard(config: &Config) -> Result<()> {
    view::print_welcome_banner();

    view::print_step(1, 5, "Busquemos inspiración");
    let mut references = collect_references()?;
    analyze_references(&mut references, config).await;

    view::print_step(2, 5, "Definamos tu proyecto");
    let project = ask_project()?;

    view::print_step(3, 5, "Información de tu marca");
    let brand = ask_brand()?;

    view::print_step(4, 5, "Resumen del proyecto");
    let brief = confirm_brief(&references, &project, &brand, config)?;

    view::print_step(5, 5, "Generación del sitio");
    let copy = generate_copy(&brief);
    let output_root = PathBuf::from(shellexpand::tilde(&config.output.root).into_owned());
    let report =
        scaffold_site(&brief, &copy, &output_root).context("no se pudo generar el sitio")?;
    view::print_scaffold_summary(&report, brief.technical.port);

    offer_brief_save(&brief, &report.output_dir)?;
    Ok(())
}

/// Runs every collected reference through scrape + vision analysis, in
/// order. Failures degrade to an error-bearing analysis and a warning line;
/// they never abort the wizard.
async fn analyze_references(references: &mut [Reference], config: &Config) {
    if references.is_empty() {
        return;
    }
    println!();
    view::print_bullet("Analizando los diseños de referencia...");
    let analyzer = ImageAnalyzer::new(&config.vision);
    for reference in references.iter_mut() {
        println!("    {}", ui::dim(format!("Analizando: {}...", reference.title)));
        analyzer.enrich_reference(reference, &config.scrapers).await;
        if let Some(error) = reference.analysis.as_ref().and_then(|a| a.error.as_deref()) {
            println!(
                "    {} {}",
                ui::yellow(format!("⚠ No se pudo analizar: {}", reference.title)),
                ui::dim(format!("({error})"))
            );
        }
    }
    println!("  {} Análisis completado", ui::success("✓"));
}

/// Builds the brief and loops on the confirmation prompt. A rejected brief
/// is discarded whole and rebuilt from the same answers.
fn confirm_brief(
    references: &[Reference],
    project: &ProjectAnswers,
    brand: &BrandInfo,
    config: &Config,
) -> Result<Brief> {
    loop {
        let brief = build_brief(references, project, brand, config.output.port);
        view::print_brief(&brief);
        let confirmed = Confirm::new()
            .with_prompt("  ¿Confirmar y proceder con la generación?")
            .default(true)
            .interact()?;
        if confirmed {
            return Ok(brief);
        }
        view::print_bullet("Regenerando el resumen con los mismos datos...");
    }
}

fn offer_brief_save(brief: &Brief, output_dir: &std::path::Path) -> Result<()> {
    let save = Confirm::new()
        .with_prompt("  ¿Guardar el brief como JSON para regenerar el sitio después?")
        .default(false)
        .interact()?;
    if !save {
        return Ok(());
    }
    let path = output_dir.join("brief.json");
    let json = serde_json::to_string_pretty(brief).context("no se pudo serializar el brief")?;
    fs::write(&path, json).with_context(|| format!("no se pudo escribir {}", path.display()))?;
    println!(
        "  {} Brief guardado en {}",
        ui::success("✓"),
        ui::value(path.display())
    );
    view::print_bullet("Regenera el sitio con: boceto build --brief brief.json");
    Ok(())
}
