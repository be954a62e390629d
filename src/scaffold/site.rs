use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::brief::Brief;
use crate::copywriter::SiteCopy;
use crate::error::ScaffoldError;

use super::context::{sanitize_project_name, template_context};
use super::engine::SiteTemplates;

/// Directories created under the project root before any file is written.
const PROJECT_DIRS: [&str; 8] = [
    "src/components",
    "src/components/ui",
    "src/components/sections",
    "src/app",
    "src/lib",
    "src/styles",
    "public",
    "public/images",
];

#[derive(Debug)]
pub struct ScaffoldReport {
    pub output_dir: PathBuf,
    pub project_name: String,
    pub created: usize,
    pub skipped: usize,
    pub files: Vec<&'static str>,
}

/// Scaffolds into a fresh timestamped directory under `output_root`.
pub fn scaffold_site(
    brief: &Brief,
    copy: &SiteCopy,
    output_root: &Path,
) -> Result<ScaffoldReport, ScaffoldError> {
    let project_name = sanitize_project_name(&brief.brand.name);
    let stamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    let output_dir = output_root.join(format!("{project_name}-{stamp}"));
    if output_dir.exists() {
        return Err(ScaffoldError::OutputExists(output_dir.display().to_string()));
    }
    scaffold_into(brief, copy, &output_dir)
}

/// Scaffolds into an exact directory, creating it if needed. Existing files
/// are left untouched and counted as skipped, so re-running against the same
/// directory only fills gaps.
pub fn scaffold_into(
    brief: &Brief,
    copy: &SiteCopy,
    output_dir: &Path,
) -> Result<ScaffoldReport, ScaffoldError> {
    let project_name = sanitize_project_name(&brief.brand.name);
    let templates = SiteTemplates::new()?;
    let context = template_context(brief, copy);

    for dir in PROJECT_DIRS {
        fs::create_dir_all(output_dir.join(dir))?;
    }

    let mut created = 0;
    let mut skipped = 0;
    let mut files = Vec::new();

    for name in SiteTemplates::names() {
        let path = output_dir.join(name);
        if path.exists() {
            skipped += 1;
        } else {
            let rendered = templates.render(name, &context)?;
            fs::write(&path, rendered)?;
            created += 1;
        }
        files.push(name);
    }

    tracing::debug!(
        output = %output_dir.display(),
        created,
        skipped,
        "site scaffolded"
    );

    Ok(ScaffoldReport {
        output_dir: output_dir.to_path_buf(),
        project_name,
        created,
        skipped,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{BrandInfo, ProjectAnswers, ProjectKind, Tone, build_brief};
    use crate::copywriter::generate_copy;
    use tempfile::TempDir;

    fn demo_brief() -> Brief {
        let project = ProjectAnswers {
            kind: ProjectKind::Landing,
            goal: Some("Vender un producto".into()),
            sections: vec!["Hero con CTA".into(), "Contacto/Formulario".into()],
        };
        let brand = BrandInfo {
            brand_name: "Nova Digital".into(),
            tagline: Some("Construimos futuro".into()),
            industry: "SaaS".into(),
            target_audience: "startups tecnológicas".into(),
            brand_values: Some("innovación, calidad".into()),
            tone: Tone::Formal,
            primary_color: "#123456".into(),
            has_logo: false,
        };
        build_brief(&[], &project, &brand, 9200)
    }

    #[test]
    fn scaffold_writes_full_tree() {
        let tmp = TempDir::new().unwrap();
        let brief = demo_brief();
        let copy = generate_copy(&brief);

        let report = scaffold_into(&brief, &copy, &tmp.path().join("site")).unwrap();
        assert_eq!(report.created, 17);
        assert_eq!(report.skipped, 0);

        let root = &report.output_dir;
        for file in [
            "package.json",
            "tailwind.config.js",
            "README.md",
            "src/app/layout.jsx",
            "src/app/page.jsx",
            "src/app/globals.css",
            "src/components/ui/Button.jsx",
            "src/components/sections/Hero.jsx",
            "src/components/sections/Footer.jsx",
        ] {
            assert!(root.join(file).exists(), "{file} should exist");
        }
        for dir in ["public/images", "src/lib", "src/styles"] {
            assert!(root.join(dir).is_dir(), "{dir}/ should exist");
        }
    }

    #[test]
    fn interpolation_reaches_the_files() {
        let tmp = TempDir::new().unwrap();
        let brief = demo_brief();
        let copy = generate_copy(&brief);
        scaffold_into(&brief, &copy, tmp.path()).unwrap();

        let package = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        assert!(package.contains("\"name\": \"nova-digital\""));
        assert!(package.contains("next dev -p 9200"));

        // Templates style from the consolidated design palette.
        let tailwind = fs::read_to_string(tmp.path().join("tailwind.config.js")).unwrap();
        assert!(tailwind.contains("'#0066FF'"));

        let logo =
            fs::read_to_string(tmp.path().join("src/components/ui/Logo.jsx")).unwrap();
        assert!(logo.contains("Nova Digital"));

        let footer =
            fs::read_to_string(tmp.path().join("src/components/sections/Footer.jsx")).unwrap();
        assert!(footer.contains("info@nova-digital.com"));
    }

    #[test]
    fn existing_files_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let brief = demo_brief();
        let copy = generate_copy(&brief);

        let sentinel = "user edited this";
        fs::write(tmp.path().join("package.json"), sentinel).unwrap();

        let report = scaffold_into(&brief, &copy, tmp.path()).unwrap();
        assert_eq!(report.created, 16);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            fs::read_to_string(tmp.path().join("package.json")).unwrap(),
            sentinel
        );

        let rerun = scaffold_into(&brief, &copy, tmp.path()).unwrap();
        assert_eq!(rerun.created, 0);
        assert_eq!(rerun.skipped, 17);
    }

    #[test]
    fn timestamped_path_carries_the_slug() {
        let tmp = TempDir::new().unwrap();
        let brief = demo_brief();
        let copy = generate_copy(&brief);

        let report = scaffold_site(&brief, &copy, tmp.path()).unwrap();
        let dir_name = report.output_dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(dir_name.starts_with("nova-digital-"));
        assert!(!dir_name.contains(':'));
        assert!(report.output_dir.starts_with(tmp.path()));
    }
}
