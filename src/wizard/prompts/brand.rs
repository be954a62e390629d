use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use crate::brief::{BrandInfo, Tone};

pub fn ask_brand() -> Result<BrandInfo> {
    let brand_name: String = Input::new()
        .with_prompt("  Nombre de la marca/empresa")
        .validate_with(required("Ingresa el nombre de la marca"))
        .interact_text()?;

    let tagline: String = Input::new()
        .with_prompt("  Tagline o slogan (opcional)")
        .allow_empty(true)
        .interact_text()?;

    let industry: String = Input::new()
        .with_prompt("  ¿A qué industria pertenece?")
        .validate_with(required("Ingresa la industria"))
        .interact_text()?;

    let target_audience: String = Input::new()
        .with_prompt("  ¿Quién es tu audiencia objetivo?")
        .validate_with(required("Describe tu audiencia"))
        .interact_text()?;

    let brand_values: String = Input::new()
        .with_prompt("  ¿Cuáles son los valores/diferenciadores de tu marca? (opcional)")
        .allow_empty(true)
        .interact_text()?;

    let tone_labels: Vec<String> = Tone::ALL.iter().map(ToString::to_string).collect();
    let tone_idx = Select::new()
        .with_prompt("  Tono de comunicación")
        .items(&tone_labels)
        .default(0)
        .interact()?;

    // "auto" defers the choice to the color resolver, which derives a color
    // from the references or the industry.
    let primary_color: String = Input::new()
        .with_prompt("  Color primario de marca (hex o nombre)")
        .default("auto".into())
        .interact_text()?;

    let has_logo = Confirm::new()
        .with_prompt("  ¿Tienes logo?")
        .default(false)
        .interact()?;

    Ok(BrandInfo {
        brand_name: brand_name.trim().to_string(),
        tagline: non_empty(&tagline),
        industry: industry.trim().to_string(),
        target_audience: target_audience.trim().to_string(),
        brand_values: non_empty(&brand_values),
        tone: Tone::ALL[tone_idx],
        primary_color: primary_color.trim().to_string(),
        has_logo,
    })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required(message: &'static str) -> impl FnMut(&String) -> Result<(), &'static str> {
    move |input: &String| {
        if input.trim().is_empty() {
            Err(message)
        } else {
            Ok(())
        }
    }
}
