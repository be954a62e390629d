use boceto::brief::{build_brief, BrandInfo, ProjectAnswers, ProjectKind, Tone};
use boceto::copywriter::generate_copy;
use boceto::reference::{
    AnalysisResult, DetectedComponent, FontSpec, LayoutInfo, OneOrMany, PaletteInfo, Platform,
    Reference, TypographyInfo,
};

fn landing(goal: &str) -> ProjectAnswers {
    ProjectAnswers {
        kind: ProjectKind::Landing,
        goal: Some(goal.to_string()),
        sections: vec![
            "Hero con CTA".into(),
            "Beneficios/Features".into(),
            "Contacto/Formulario".into(),
        ],
    }
}

fn brand(primary_color: &str, tone: Tone) -> BrandInfo {
    BrandInfo {
        brand_name: "Nova Digital".into(),
        tagline: Some("software que acompaña".into()),
        industry: "SaaS".into(),
        target_audience: "startups tecnológicas".into(),
        brand_values: Some("claridad, velocidad".into()),
        tone,
        primary_color: primary_color.into(),
        has_logo: false,
    }
}

/// A reference the vision step fully analyzed: pink-on-dark palette, grid
/// layout, serif-free typography.
fn analyzed_reference() -> Reference {
    let mut reference = Reference::new(
        "Tech Startup Design",
        "https://dribbble.com/shots/23265919-Saas-Landing-Page",
        Platform::Dribbble,
    )
    .with_style("Moderno/Tech")
    .with_relevance(0.88);
    reference.analysis = Some(AnalysisResult {
        layout: Some(LayoutInfo {
            kind: Some("modern-grid".into()),
            sections: vec!["hero".into(), "features".into()],
            ..LayoutInfo::default()
        }),
        components: vec![
            DetectedComponent::named("header"),
            DetectedComponent::named("hero"),
        ],
        color_palette: Some(PaletteInfo {
            primary: Some("#EA4C89".into()),
            secondary: Some("#0D0C22".into()),
            accent: Some(OneOrMany::Many(vec!["#7C3AED".into(), "#06B6D4".into()])),
            ..PaletteInfo::default()
        }),
        typography: Some(TypographyInfo {
            headings: Some(FontSpec::new("Space Grotesk", "bold")),
            body: Some(FontSpec::new("Inter", "normal")),
        }),
        ..AnalysisResult::default()
    });
    reference
}

#[test]
fn empty_inputs_still_build_a_complete_brief() {
    let brief = build_brief(
        &[],
        &landing("Vender un producto"),
        &brand("auto", Tone::Formal),
        9200,
    );

    // saas hits the industry table for the brand primary.
    assert_eq!(brief.brand.colors.primary, "#00CEC9");
    assert_eq!(brief.design.color_palette.primary, "#0066FF");
    assert_eq!(brief.design.color_palette.secondary, "#64748B");
    assert_eq!(brief.design.color_palette.accent, "#10B981");
    assert_eq!(brief.design.style, "modern");
    assert_eq!(brief.design.layout.kind, "standard");
    assert_eq!(brief.technical.port, 9200);
    assert!(brief.formatted.contains("📌 TIPO: Landing Page"));
    assert!(brief.formatted.contains("💡 REFERENCIAS (0):"));
}

#[test]
fn analyzed_reference_drives_both_color_channels_and_style() {
    let references = vec![analyzed_reference()];
    let brief = build_brief(
        &references,
        &landing("Vender un producto"),
        &brand("auto", Tone::Formal),
        9200,
    );

    assert_eq!(brief.brand.colors.primary, "#EA4C89");
    assert_eq!(brief.design.color_palette.primary, "#EA4C89");
    assert_eq!(brief.design.color_palette.secondary, "#0D0C22");
    assert_eq!(brief.design.color_palette.accent, "#7C3AED");
    assert_eq!(brief.design.style, "moderno/tech");
    assert_eq!(brief.design.layout.kind, "grid");
    assert_eq!(
        brief.design.typography.headings.family,
        "Space Grotesk, sans-serif"
    );

    let elements = &brief.design.inspirations[0].key_elements;
    assert!(elements.contains(&"header".to_string()));
    assert!(elements.contains(&"modern-grid layout".to_string()));
    assert!(elements.contains(&"custom color scheme".to_string()));
}

#[test]
fn explicit_brand_color_wins_but_design_palette_stays_analyzed() {
    let references = vec![analyzed_reference()];
    let brief = build_brief(
        &references,
        &landing("Vender un producto"),
        &brand("#123456", Tone::Formal),
        9200,
    );

    // The brand channel respects the wizard answer, the design channel
    // keeps following the references.
    assert_eq!(brief.brand.colors.primary, "#123456");
    assert_eq!(brief.design.color_palette.primary, "#EA4C89");
}

#[test]
fn failed_analysis_degrades_without_leaking_the_error() {
    let mut reference = Reference::new(
        "Referencia 1",
        "https://www.behance.net/gallery/1/x",
        Platform::Behance,
    );
    reference.analysis = Some(AnalysisResult::failed("scrape timed out"));

    let brief = build_brief(
        &[reference],
        &landing("Vender un producto"),
        &brand("auto", Tone::Formal),
        9200,
    );

    assert_eq!(
        brief.design.inspirations[0].key_elements,
        vec!["modern layout", "responsive design", "clean typography"]
    );
    assert_eq!(brief.design.color_palette.primary, "#0066FF");
    assert!(!brief.formatted.contains("scrape timed out"));
}

#[test]
fn copy_merges_goal_ctas_with_tone_flavored_ones() {
    let brief = build_brief(
        &[],
        &landing("Evento o webinar"),
        &brand("auto", Tone::Friendly),
        9200,
    );
    let copy = generate_copy(&brief);

    assert_eq!(
        copy.cta,
        vec![
            "Registrarse Gratis",
            "Reservar Lugar",
            "Unirse Ahora",
            "Charlemos",
            "Empecemos Juntos"
        ]
    );
    assert_eq!(copy.hero.title, "¡Hola! Somos Nova Digital");
    assert_eq!(copy.features.items.len(), 3);
}

#[test]
fn copy_seo_block_reflects_brand_and_market() {
    let brief = build_brief(
        &[],
        &landing("Vender un producto"),
        &brand("auto", Tone::Formal),
        9200,
    );
    let copy = generate_copy(&brief);

    assert_eq!(copy.seo.title, "Nova Digital - SaaS Profesional | España");
    assert!(copy.seo.keywords.contains("productividad"));
    assert!(copy.seo.keywords.ends_with("españa"));
    assert!(copy.seo.description.contains("startups tecnológicas"));
}

#[test]
fn brief_survives_a_json_round_trip() {
    let references = vec![analyzed_reference()];
    let brief = build_brief(
        &references,
        &landing("App download"),
        &brand("#BADA55", Tone::Technical),
        9300,
    );

    let json = serde_json::to_string_pretty(&brief).unwrap();
    let restored: boceto::brief::Brief = serde_json::from_str(&json).unwrap();
    assert_eq!(brief, restored);

    // The restored brief generates byte-identical copy, which is what the
    // `build --brief` command relies on.
    let first = serde_json::to_string(&generate_copy(&brief)).unwrap();
    let second = serde_json::to_string(&generate_copy(&restored)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rebuilding_from_identical_answers_is_deterministic() {
    let references = vec![analyzed_reference()];
    let project = landing("Capturar leads (formularios)");
    let info = brand("auto", Tone::Innovative);

    let first = build_brief(&references, &project, &info, 9200);
    let second = build_brief(&references, &project, &info, 9200);
    assert_eq!(first, second);
    assert_eq!(first.formatted, second.formatted);
}
