use console::style;

use crate::brief::Brief;
use crate::reference::Reference;
use crate::scaffold::ScaffoldReport;

pub fn print_welcome_banner() {
    println!();
    println!(
        "  {}",
        style("🎯 Boceto — de la inspiración al sitio").cyan().bold()
    );
    println!(
        "  {}",
        style("Referencias de diseño → brief → starter Next.js en español").dim()
    );
    println!();
}

pub fn print_step(current: u8, total: u8, title: &str) {
    println!();
    println!(
        "  {} {}",
        style(format!("[{current}/{total}]")).cyan().bold(),
        style(title).white().bold()
    );
    println!("  {}", style("─".repeat(50)).dim());
}

pub fn print_bullet(text: &str) {
    println!("  {} {}", style("›").cyan(), text);
}

/// Numbered preview line for a collected reference. Stars come from the
/// relevance score, five at 1.0.
pub fn print_reference(index: usize, reference: &Reference) {
    let stars = "★".repeat((reference.relevance * 5.0).round() as usize);
    match reference.style.as_deref() {
        Some(tag) => println!(
            "  {}. {} {}",
            index + 1,
            style(&reference.title).white().bold(),
            style(format!("({tag})")).dim()
        ),
        None => println!("  {}. {}", index + 1, style(&reference.title).white().bold()),
    }
    println!("     {}", style(&reference.url).cyan().underlined());
    if !stars.is_empty() {
        println!("     Relevancia: {}", style(stars).yellow());
    }
    println!();
}

pub fn print_brief(brief: &Brief) {
    println!();
    println!("  {}", style("📄 RESUMEN DEL PROYECTO").white().bold());
    println!("  {}", style("═".repeat(50)).cyan());
    println!("{}", brief.formatted);
    println!("  {}", style("═".repeat(50)).cyan());
    println!();
}

pub fn print_scaffold_summary(report: &ScaffoldReport, port: u16) {
    let path = report.output_dir.display();
    println!();
    println!(
        "  {} {}",
        style("✓").green().bold(),
        style("¡Primera versión lista!").white().bold()
    );
    println!();
    println!(
        "  📁 Archivos generados en: {}",
        style(&path).green()
    );
    println!(
        "     {}",
        style(format!(
            "{} archivos nuevos, {} ya existentes",
            report.created, report.skipped
        ))
        .dim()
    );
    println!();
    println!("  🚀 Para ejecutar:");
    println!(
        "     {}",
        style(format!("cd {path} && npm install && npm run dev")).yellow()
    );
    println!(
        "  🌐 Vista previa en: {}",
        style(format!("http://localhost:{port}")).cyan().underlined()
    );
    println!();
}
