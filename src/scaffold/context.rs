use serde::Serialize;
use tera::Context;

use crate::brief::Brief;
use crate::copywriter::SiteCopy;

/// Icons cycled over the feature cards.
const FEATURE_ICONS: [&str; 3] = ["🚀", "⭐", "💡"];

#[derive(Serialize)]
struct FeatureSlot<'a> {
    title: &'a str,
    description: &'a str,
    icon: &'static str,
}

/// Flattens the brief and the generated copy into the template variable set.
/// Every variable any template mentions is present, so rendering never hits
/// Tera's missing-variable error.
pub fn template_context(brief: &Brief, copy: &SiteCopy) -> Context {
    let mut context = Context::new();
    let project_name = sanitize_project_name(&brief.brand.name);

    context.insert("project_name", &project_name);
    context.insert("brand_name", &brief.brand.name);
    context.insert("port", &brief.technical.port);

    let palette = &brief.design.color_palette;
    context.insert("color_primary", &palette.primary);
    context.insert("color_primary_dark", &darken_hex(&palette.primary));
    context.insert("color_primary_light", &lighten_hex(&palette.primary));
    context.insert("color_secondary", &palette.secondary);
    context.insert("color_accent", &palette.accent);

    let typography = &brief.design.typography;
    context.insert("font_headings", &typography.headings.family);
    context.insert("heading_weight", &typography.headings.weight);
    context.insert("font_body", &typography.body.family);

    context.insert("hero_title", &copy.hero.title);
    context.insert("hero_subtitle", &copy.hero.subtitle);
    context.insert("hero_description", &copy.hero.description);
    context.insert("features_title", &copy.features.title);
    context.insert("features_subtitle", &copy.features.subtitle);
    let features: Vec<FeatureSlot<'_>> = copy
        .features
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| FeatureSlot {
            title: &item.title,
            description: &item.description,
            icon: FEATURE_ICONS[i % FEATURE_ICONS.len()],
        })
        .collect();
    context.insert("features", &features);
    context.insert("about_description", &copy.about.description);
    context.insert("contact_title", &copy.contact.title);
    context.insert("contact_subtitle", &copy.contact.subtitle);

    context.insert(
        "cta_primary",
        copy.cta.first().map(String::as_str).unwrap_or("Empezar Ahora"),
    );
    context.insert(
        "cta_form",
        copy.cta.get(1).map(String::as_str).unwrap_or("Enviar Mensaje"),
    );

    context.insert("footer_blurb", &footer_blurb(brief));
    context.insert("contact_email", &format!("info@{project_name}.com"));

    context.insert("seo_title", &copy.seo.title);
    context.insert("seo_description", &copy.seo.description);
    context.insert("seo_keywords", &copy.seo.keywords);

    context.insert("sections", &brief.project.sections);

    context
}

/// Brand name to a package/directory-safe slug.
pub fn sanitize_project_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Shifts every hex digit in the string, leaving other characters alone.
/// Crude per-digit arithmetic, but it keeps shades in the primary's family
/// without pulling in a color library.
fn shift_hex(color: &str, shift: i32) -> String {
    color
        .chars()
        .map(|c| match c.to_digit(16) {
            Some(d) => {
                let shifted = (d as i32 + shift).clamp(0, 15) as u32;
                char::from_digit(shifted, 16).unwrap_or(c)
            }
            None => c,
        })
        .collect()
}

pub fn darken_hex(color: &str) -> String {
    shift_hex(color, -2)
}

pub fn lighten_hex(color: &str) -> String {
    shift_hex(color, 3)
}

fn footer_blurb(brief: &Brief) -> String {
    brief
        .brand
        .values
        .as_ref()
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| {
            format!(
                "Expertos en {} comprometidos con la excelencia.",
                brief.brand.industry
            )
        })
}
