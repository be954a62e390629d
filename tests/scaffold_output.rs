use std::fs;

use boceto::brief::{build_brief, BrandInfo, Brief, ProjectAnswers, ProjectKind, Tone};
use boceto::copywriter::generate_copy;
use boceto::reference::{AnalysisResult, OneOrMany, PaletteInfo, Platform, Reference};
use boceto::scaffold::{scaffold_into, scaffold_site};
use tempfile::TempDir;

/// Brief shaped like a finished wizard run: one analyzed dribbble reference
/// whose palette should reach the generated stylesheets.
fn wizard_brief() -> Brief {
    let mut reference = Reference::new(
        "Tech Startup Design",
        "https://dribbble.com/shots/23265919-Saas-Landing-Page",
        Platform::Dribbble,
    )
    .with_style("Moderno/Tech")
    .with_relevance(0.88);
    reference.analysis = Some(AnalysisResult {
        color_palette: Some(PaletteInfo {
            primary: Some("#EA4C89".into()),
            secondary: Some("#0D0C22".into()),
            accent: Some(OneOrMany::One("#7C3AED".into())),
            ..PaletteInfo::default()
        }),
        ..AnalysisResult::default()
    });

    let project = ProjectAnswers {
        kind: ProjectKind::Landing,
        goal: Some("Vender un producto".into()),
        sections: vec!["Hero con CTA".into(), "Beneficios/Features".into()],
    };
    let brand = BrandInfo {
        brand_name: "Nova Digital".into(),
        tagline: Some("software que acompaña".into()),
        industry: "SaaS".into(),
        target_audience: "startups tecnológicas".into(),
        brand_values: None,
        tone: Tone::Formal,
        primary_color: "auto".into(),
        has_logo: false,
    };
    build_brief(&[reference], &project, &brand, 9200)
}

#[test]
fn full_pipeline_writes_a_runnable_starter() {
    let brief = wizard_brief();
    let copy = generate_copy(&brief);
    let root = TempDir::new().unwrap();

    let report = scaffold_site(&brief, &copy, root.path()).unwrap();
    assert_eq!(report.created, 17);
    assert_eq!(report.skipped, 0);
    assert!(report
        .output_dir
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("nova-digital-"));

    let package = fs::read_to_string(report.output_dir.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"nova-digital\""));
    assert!(package.contains("next dev -p 9200"));

    let hero =
        fs::read_to_string(report.output_dir.join("src/components/sections/Hero.jsx")).unwrap();
    assert!(hero.contains(&copy.hero.title));
    assert!(hero.contains(&copy.cta[0]));

    let layout = fs::read_to_string(report.output_dir.join("src/app/layout.jsx")).unwrap();
    assert!(layout.contains("Nova Digital - SaaS Profesional | España"));
    assert!(layout.contains("lang=\"es\""));

    // The analyzed palette reaches the stylesheets, shifted variants included.
    let globals = fs::read_to_string(report.output_dir.join("src/app/globals.css")).unwrap();
    assert!(globals.contains("#EA4C89"));
    let tailwind = fs::read_to_string(report.output_dir.join("tailwind.config.js")).unwrap();
    assert!(tailwind.contains("'#EA4C89'"));
    assert!(tailwind.contains("'#c82a67'"));
    assert!(tailwind.contains("'#fd7fbc'"));

    let readme = fs::read_to_string(report.output_dir.join("README.md")).unwrap();
    assert!(readme.contains("# Nova Digital"));
    assert!(readme.contains("- Hero con CTA"));
    assert!(readme.contains("http://localhost:9200"));
}

#[test]
fn rerun_into_the_same_directory_only_fills_gaps() {
    let brief = wizard_brief();
    let copy = generate_copy(&brief);
    let root = TempDir::new().unwrap();
    let target = root.path().join("site");

    let first = scaffold_into(&brief, &copy, &target).unwrap();
    assert_eq!(first.created, 17);

    fs::write(target.join("package.json"), "{ \"edited\": true }").unwrap();
    let second = scaffold_into(&brief, &copy, &target).unwrap();
    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, 17);

    let kept = fs::read_to_string(target.join("package.json")).unwrap();
    assert_eq!(kept, "{ \"edited\": true }");
}

#[test]
fn saved_brief_json_regenerates_an_identical_site() {
    let brief = wizard_brief();
    let json = serde_json::to_string_pretty(&brief).unwrap();
    let restored: Brief = serde_json::from_str(&json).unwrap();

    let root = TempDir::new().unwrap();
    let original_dir = root.path().join("original");
    let rebuilt_dir = root.path().join("rebuilt");
    scaffold_into(&brief, &generate_copy(&brief), &original_dir).unwrap();
    scaffold_into(&restored, &generate_copy(&restored), &rebuilt_dir).unwrap();

    for file in ["package.json", "src/components/sections/Hero.jsx", "src/app/globals.css"] {
        let original = fs::read_to_string(original_dir.join(file)).unwrap();
        let rebuilt = fs::read_to_string(rebuilt_dir.join(file)).unwrap();
        assert_eq!(original, rebuilt, "{file} differs after the round trip");
    }
}
