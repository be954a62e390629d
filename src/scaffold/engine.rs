use tera::Tera;

use crate::error::ScaffoldError;

/// Registration table. The template name doubles as the file's relative path
/// inside the generated project, in write order.
const TEMPLATES: &[(&str, &str)] = &[
    ("package.json", include_str!("templates/package.json.tera")),
    ("next.config.js", include_str!("templates/next.config.js.tera")),
    ("postcss.config.js", include_str!("templates/postcss.config.js.tera")),
    ("tailwind.config.js", include_str!("templates/tailwind.config.js.tera")),
    ("README.md", include_str!("templates/README.md.tera")),
    ("src/app/globals.css", include_str!("templates/globals.css.tera")),
    ("src/app/layout.jsx", include_str!("templates/layout.jsx.tera")),
    ("src/app/page.jsx", include_str!("templates/page.jsx.tera")),
    ("src/components/ui/Button.jsx", include_str!("templates/Button.jsx.tera")),
    ("src/components/ui/Card.jsx", include_str!("templates/Card.jsx.tera")),
    ("src/components/ui/Container.jsx", include_str!("templates/Container.jsx.tera")),
    ("src/components/ui/Logo.jsx", include_str!("templates/Logo.jsx.tera")),
    ("src/components/sections/Header.jsx", include_str!("templates/Header.jsx.tera")),
    ("src/components/sections/Hero.jsx", include_str!("templates/Hero.jsx.tera")),
    ("src/components/sections/Features.jsx", include_str!("templates/Features.jsx.tera")),
    ("src/components/sections/Contact.jsx", include_str!("templates/Contact.jsx.tera")),
    ("src/components/sections/Footer.jsx", include_str!("templates/Footer.jsx.tera")),
];

/// Tera engine preloaded with every embedded site template.
pub struct SiteTemplates {
    tera: Tera,
}

impl SiteTemplates {
    pub fn new() -> Result<Self, ScaffoldError> {
        let mut tera = Tera::default();
        for (name, content) in TEMPLATES {
            tera.add_raw_template(name, content).map_err(|e| ScaffoldError::Render {
                name: (*name).to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(Self { tera })
    }

    /// Relative output paths, in write order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(name, _)| *name)
    }

    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String, ScaffoldError> {
        self.tera.render(name, context).map_err(|e| ScaffoldError::Render {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}
