use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;

use boceto::brief::{build_brief, BrandInfo, Brief, ProjectAnswers, ProjectKind, Tone};
use boceto::config::Config;
use boceto::copywriter::generate_copy;
use boceto::reference::{platform_for_url, AnalysisResult, Reference};
use boceto::scaffold::context::template_context;
use boceto::scaffold::{scaffold_into, scaffold_site, SiteTemplates};
use boceto::ui::style as ui;
use boceto::vision::ImageAnalyzer;
use boceto::wizard::{self, view};

use crate::cli::commands::{Cli, Commands};

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::New => wizard::run_wizard(&config).await,
        Commands::Analyze { url, json } => run_analyze(&url, json, &config).await,
        Commands::Components { url } => run_components(&url, &config).await,
        Commands::Build { brief, output } => run_build(&brief, output.as_deref(), &config),
    }
}

async fn run_analyze(url: &str, json: bool, config: &Config) -> Result<()> {
    let analyzer = ImageAnalyzer::new(&config.vision);
    if json {
        let analysis = analyzer.analyze_url(url, &config.scrapers).await;
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}", ui::yellow("🔍 Analizando diseño..."));
    let analysis = analyzer.analyze_url(url, &config.scrapers).await;
    print_analysis_summary(&analysis);
    Ok(())
}

fn print_analysis_summary(analysis: &AnalysisResult) {
    if let Some(error) = analysis.error.as_deref() {
        println!(
            "  {} {}",
            ui::warn("⚠"),
            ui::yellow(format!("análisis degradado: {error}"))
        );
        return;
    }

    println!();
    if let Some(meta) = &analysis.metadata {
        if let Some(title) = meta.title.as_deref().filter(|t| !t.is_empty()) {
            println!("  {}", ui::header(title));
        }
        if let Some(description) = meta.description.as_deref().filter(|d| !d.is_empty()) {
            println!("  {}", ui::dim(description));
        }
        if let Some(model) = meta.model.as_deref() {
            println!("  {} {}", ui::dim("Modelo:"), model);
        }
        println!();
    }

    if let Some(kind) = analysis.layout.as_ref().and_then(|l| l.kind.as_deref()) {
        println!("  Layout: {}", ui::cyan(kind));
    }
    let components: Vec<&str> = analysis.components.iter().filter_map(|c| c.label()).collect();
    if !components.is_empty() {
        println!("  Componentes: {}", components.join(", "));
    }
    if let Some(palette) = &analysis.color_palette {
        let mut swatches: Vec<String> = Vec::new();
        if let Some(primary) = palette.primary.as_deref() {
            swatches.push(format!("primario {primary}"));
        }
        if let Some(secondary) = palette.secondary.as_deref() {
            swatches.push(format!("secundario {secondary}"));
        }
        if let Some(accent) = palette.accent.as_ref().and_then(|a| a.values().first().copied()) {
            swatches.push(format!("acento {accent}"));
        }
        if !swatches.is_empty() {
            println!("  Colores: {}", swatches.join(", "));
        }
    }
    if let Some(family) = analysis
        .typography
        .as_ref()
        .and_then(|t| t.headings.as_ref())
        .and_then(|f| f.family.as_deref())
    {
        println!("  Tipografía: {family}");
    }
}

async fn run_components(url: &str, config: &Config) -> Result<()> {
    println!("{}", ui::cyan("⚡ Generando componentes React..."));
    let analyzer = ImageAnalyzer::new(&config.vision);
    let analysis = analyzer.analyze_url(url, &config.scrapers).await;
    if let Some(error) = analysis.error.as_deref() {
        bail!("el análisis falló: {error}");
    }

    let brief = component_preview_brief(url, analysis, config.output.port);
    let copy = generate_copy(&brief);
    let context = template_context(&brief, &copy);
    let templates = SiteTemplates::new()?;

    println!("{}", ui::value("\n✨ Componentes generados:"));
    for name in SiteTemplates::names().filter(|n| n.starts_with("src/components/")) {
        let short = name.rsplit('/').next().unwrap_or(name);
        println!("{}", style(format!("\n🧩 {short}")).blue());
        println!("{}", ui::dim("─".repeat(50)));
        println!("{}", templates.render(name, &context)?);
    }

    println!("{}", style("\n🎨 Estilos Tailwind CSS:").magenta());
    println!("{}", templates.render("tailwind.config.js", &context)?);
    Ok(())
}

/// A stand-in brief so single-design previews flow through the same
/// consolidation the wizard uses. Brand facts come from the scrape metadata
/// where available.
fn component_preview_brief(url: &str, analysis: AnalysisResult, port: u16) -> Brief {
    let title = analysis
        .metadata
        .as_ref()
        .and_then(|m| m.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Proyecto Demo".to_string());
    let tagline = analysis
        .metadata
        .as_ref()
        .and_then(|m| m.description.clone())
        .filter(|d| !d.is_empty());

    let mut reference =
        Reference::new(title.clone(), url, platform_for_url(url)).with_relevance(1.0);
    reference.analysis = Some(analysis);

    let project = ProjectAnswers {
        kind: ProjectKind::Landing,
        goal: None,
        sections: vec![
            "Hero con CTA".to_string(),
            "Beneficios/Features".to_string(),
            "Contacto/Formulario".to_string(),
        ],
    };
    let brand = BrandInfo {
        brand_name: title,
        tagline,
        industry: "diseño web".to_string(),
        target_audience: "equipos de producto".to_string(),
        brand_values: None,
        tone: Tone::default(),
        primary_color: "auto".to_string(),
        has_logo: false,
    };
    build_brief(&[reference], &project, &brand, port)
}

fn run_build(brief_path: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let raw = fs::read_to_string(brief_path)
        .with_context(|| format!("no se pudo leer {}", brief_path.display()))?;
    let brief: Brief = serde_json::from_str(&raw)
        .with_context(|| format!("brief inválido en {}", brief_path.display()))?;
    let copy = generate_copy(&brief);

    let report = match output {
        Some(dir) => scaffold_into(&brief, &copy, dir)?,
        None => {
            let root = PathBuf::from(shellexpand::tilde(&config.output.root).into_owned());
            scaffold_site(&brief, &copy, &root)?
        }
    };
    view::print_scaffold_summary(&report, brief.technical.port);
    Ok(())
}
