//! Tone-matched section copy. One generator per tone, same shape everywhere:
//! hero, features, about and contact text with the brand woven in.

use crate::brief::{Brief, Tone};

use super::{AboutCopy, ContactCopy, FeatureItem, FeaturesCopy, HeroCopy};

pub struct ToneSections {
    pub hero: HeroCopy,
    pub features: FeaturesCopy,
    pub about: AboutCopy,
    pub contact: ContactCopy,
}

pub fn sections_for(brief: &Brief) -> ToneSections {
    match brief.brand.tone {
        Tone::Formal => formal(brief),
        Tone::Friendly => friendly(brief),
        Tone::Innovative => innovative(brief),
        Tone::Elegant => elegant(brief),
        Tone::Playful => playful(brief),
        Tone::Technical => technical(brief),
    }
}

/// Brief CTAs first, then the tone-flavored ones, capped at five.
pub fn merge_ctas(brief: &Brief) -> Vec<String> {
    let mut ctas = brief.content.cta.clone();
    ctas.extend(tone_ctas(brief.brand.tone).iter().map(|c| c.to_string()));
    ctas.truncate(5);
    ctas
}

pub fn tone_ctas(tone: Tone) -> [&'static str; 4] {
    match tone {
        Tone::Formal => [
            "Solicitar Consultoría",
            "Agendar Reunión",
            "Obtener Propuesta",
            "Contactar Especialista",
        ],
        Tone::Friendly => ["Charlemos", "Empecemos Juntos", "¡Hablemos!", "Contáctanos"],
        Tone::Innovative => [
            "Revolucionar Ahora",
            "Transformar Todo",
            "Romper Moldes",
            "Crear el Futuro",
        ],
        Tone::Elegant => [
            "Experiencia Premium",
            "Servicio Exclusivo",
            "Distinción Total",
            "Excelencia Garantizada",
        ],
        Tone::Playful => ["¡Súmate!", "¡Vamos!", "Hagámoslo Épico", "¡Empezamos Ya!"],
        Tone::Technical => [
            "Implementar Solución",
            "Analizar Requerimientos",
            "Consulta Técnica",
            "Arquitectura Personalizada",
        ],
    }
}

fn values_or(brief: &Brief, fallback: &str) -> String {
    brief
        .brand
        .values
        .as_ref()
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

fn item(title: &str, description: String) -> FeatureItem {
    FeatureItem { title: title.to_string(), description }
}

fn formal(brief: &Brief) -> ToneSections {
    let brand = &brief.brand;
    ToneSections {
        hero: HeroCopy {
            title: format!("Excelencia en {}", brand.industry),
            subtitle: format!(
                "{} ofrece soluciones profesionales de alta calidad para {}",
                brand.name, brand.target_audience
            ),
            description: "Con años de experiencia y un enfoque centrado en resultados, \
                          proporcionamos servicios especializados que impulsan el crecimiento \
                          empresarial."
                .into(),
        },
        features: FeaturesCopy {
            title: "Nuestros Servicios Profesionales".into(),
            subtitle: "Soluciones integrales diseñadas para su éxito empresarial".into(),
            items: vec![
                item(
                    "Expertise Profesional",
                    format!(
                        "Equipo altamente calificado con profundo conocimiento en {}",
                        brand.industry
                    ),
                ),
                item(
                    "Resultados Medibles",
                    "Metodologías probadas que garantizan el retorno de inversión".into(),
                ),
                item(
                    "Soporte Integral",
                    "Acompañamiento completo desde la planificación hasta la implementación"
                        .into(),
                ),
            ],
        },
        about: AboutCopy {
            title: format!("Acerca de {}", brand.name),
            description: format!(
                "Somos una empresa líder en {}, comprometida con la excelencia operacional y \
                 la satisfacción del cliente. Nuestro enfoque profesional y metodologías \
                 probadas nos permiten entregar resultados excepcionales.",
                brand.industry
            ),
            values: values_or(
                brief,
                "Integridad, excelencia y compromiso con nuestros clientes",
            ),
        },
        contact: ContactCopy {
            title: "Contacto Profesional".into(),
            subtitle: "Discutamos cómo podemos contribuir a su éxito empresarial".into(),
            description: "Nuestro equipo está disponible para una consultoría inicial sin \
                          compromiso."
                .into(),
        },
    }
}

fn friendly(brief: &Brief) -> ToneSections {
    let brand = &brief.brand;
    ToneSections {
        hero: HeroCopy {
            title: format!("¡Hola! Somos {}", brand.name),
            subtitle: format!(
                "Te ayudamos con {} de forma fácil y personalizada",
                brand.industry
            ),
            description: "Creemos que trabajar juntos debe ser una experiencia agradable. Por \
                          eso, nos enfocamos en entenderte y ofrecerte exactamente lo que \
                          necesitas."
                .into(),
        },
        features: FeaturesCopy {
            title: "¿Por qué trabajar con nosotros?".into(),
            subtitle: "Porque nos importas y queremos verte triunfar".into(),
            items: vec![
                item(
                    "Trato Personal",
                    "Cada cliente es único y merece atención personalizada".into(),
                ),
                item(
                    "Comunicación Clara",
                    "Te explicamos todo de manera sencilla, sin tecnicismos".into(),
                ),
                item("Estamos Contigo", "Te acompañamos en cada paso del proceso".into()),
            ],
        },
        about: AboutCopy {
            title: format!("Conoce a {}", brand.name),
            description: format!(
                "Somos un equipo apasionado por {}. Nos levantamos cada día pensando en cómo \
                 podemos ayudar mejor a personas como tú. Creemos en las relaciones duraderas \
                 y en hacer las cosas bien.",
                brand.industry
            ),
            values: values_or(brief, "Cercanía, honestidad y pasión por lo que hacemos"),
        },
        contact: ContactCopy {
            title: "¡Hablemos!".into(),
            subtitle: "Estamos aquí para ayudarte con cualquier duda".into(),
            description: "No importa si es una pregunta pequeña o un proyecto grande, nos \
                          encanta conversar."
                .into(),
        },
    }
}

fn innovative(brief: &Brief) -> ToneSections {
    let brand = &brief.brand;
    ToneSections {
        hero: HeroCopy {
            title: format!("Revolucionando {}", brand.industry),
            subtitle: format!("{}: Donde la innovación encuentra la ejecución", brand.name),
            description: "Desafiamos el status quo y creamos soluciones que transforman \
                          industrias. El futuro no se espera, se construye."
                .into(),
        },
        features: FeaturesCopy {
            title: "Innovación en Acción".into(),
            subtitle: "Tecnología disruptiva que redefine posibilidades".into(),
            items: vec![
                item(
                    "Vanguardia Tecnológica",
                    "Utilizamos las últimas innovaciones para crear ventajas competitivas"
                        .into(),
                ),
                item(
                    "Pensamiento Disruptivo",
                    "Cuestionamos todo y reinventamos las reglas del juego".into(),
                ),
                item(
                    "Futuro Hoy",
                    "Implementamos soluciones que otros aún están imaginando".into(),
                ),
            ],
        },
        about: AboutCopy {
            title: format!("La Revolución {}", brand.name),
            description: format!(
                "No somos una empresa tradicional de {}. Somos disruptores, innovadores que \
                 creen que todo puede mejorarse. Cada proyecto es una oportunidad de cambiar \
                 las reglas y crear el futuro.",
                brand.industry
            ),
            values: values_or(brief, "Innovación radical, audacia y transformación constante"),
        },
        contact: ContactCopy {
            title: "Únete a la Revolución".into(),
            subtitle: "Construyamos juntos el futuro de tu industria".into(),
            description: "Si estás listo para romper moldes y liderar el cambio, hablemos."
                .into(),
        },
    }
}

fn elegant(brief: &Brief) -> ToneSections {
    let brand = &brief.brand;
    ToneSections {
        hero: HeroCopy {
            title: format!("Distinción en {}", brand.industry),
            subtitle: format!("{}: Donde la elegancia encuentra la funcionalidad", brand.name),
            description: "Creamos experiencias excepcionales que reflejan sofisticación y \
                          atención al detalle. Cada elemento está cuidadosamente diseñado \
                          para superar expectativas."
                .into(),
        },
        features: FeaturesCopy {
            title: "Excelencia Refinada".into(),
            subtitle: "Servicios de distinción para clientes exigentes".into(),
            items: vec![
                item(
                    "Atención Exclusiva",
                    "Servicios premium diseñados para satisfacer los más altos estándares"
                        .into(),
                ),
                item(
                    "Diseño Sofisticado",
                    "Cada detalle refleja elegancia y funcionalidad superior".into(),
                ),
                item(
                    "Experiencia Premium",
                    "Tratamiento VIP desde el primer contacto hasta la entrega final".into(),
                ),
            ],
        },
        about: AboutCopy {
            title: format!("El Arte de {}", brand.name),
            description: format!(
                "Representamos la excelencia en {}. Cada proyecto es una obra maestra, \
                 cuidadosamente crafteada para clientes que valoran la distinción y la \
                 calidad sin compromisos.",
                brand.industry
            ),
            values: values_or(brief, "Elegancia, exclusividad y perfección en cada detalle"),
        },
        contact: ContactCopy {
            title: "Conversación Distinguida".into(),
            subtitle: "Discutamos su visión de excelencia".into(),
            description: "Reservamos tiempo exclusivo para comprender sus expectativas más \
                          refinadas."
                .into(),
        },
    }
}

fn playful(brief: &Brief) -> ToneSections {
    let brand = &brief.brand;
    ToneSections {
        hero: HeroCopy {
            title: format!("¡Energía pura en {}!", brand.industry),
            subtitle: format!(
                "{} - Velocidad, creatividad y resultados épicos",
                brand.name
            ),
            description: "¿Estás listo para la aventura? Transformamos ideas en realidades \
                          increíbles con la energía de un equipo que nunca se rinde. ¡Vamos \
                          a brillar juntos!"
                .into(),
        },
        features: FeaturesCopy {
            title: "¡Somos Imparables!".into(),
            subtitle: "Energía contagiosa que impulsa tu éxito".into(),
            items: vec![
                item(
                    "Velocidad Extrema",
                    "¡Nos movemos rápido y entregamos resultados que te van a encantar!"
                        .into(),
                ),
                item(
                    "Creatividad Sin Límites",
                    "Ideas frescas, soluciones únicas y mucha diversión en el proceso".into(),
                ),
                item(
                    "Resultados Épicos",
                    "No hacemos las cosas a medias. Cada proyecto es una obra maestra".into(),
                ),
            ],
        },
        about: AboutCopy {
            title: format!("¡Conoce al Team {}!", brand.name),
            description: format!(
                "Somos un grupo de apasionados de {} que creemos que el trabajo debe ser \
                 emocionante. Combinamos experiencia con energía juvenil para crear \
                 experiencias inolvidables.",
                brand.industry
            ),
            values: values_or(brief, "Pasión, energía y diversión en todo lo que hacemos"),
        },
        contact: ContactCopy {
            title: "¡Conectemos!".into(),
            subtitle: "¿Listo para empezar esta aventura juntos?".into(),
            description: "¡Escríbenos! Queremos conocer tu proyecto y hacerlo realidad de la \
                          forma más épica posible."
                .into(),
        },
    }
}

fn technical(brief: &Brief) -> ToneSections {
    let brand = &brief.brand;
    ToneSections {
        hero: HeroCopy {
            title: format!("Soluciones Técnicas Especializadas en {}", brand.industry),
            subtitle: format!("{}: Expertise técnico de vanguardia", brand.name),
            description: "Implementamos arquitecturas robustas y metodologías probadas para \
                          resolver desafíos técnicos complejos. Nuestra experiencia \
                          especializada garantiza soluciones escalables y eficientes."
                .into(),
        },
        features: FeaturesCopy {
            title: "Competencias Técnicas Avanzadas".into(),
            subtitle: "Especialización profunda en tecnologías de vanguardia".into(),
            items: vec![
                item(
                    "Arquitectura Escalable",
                    "Diseños técnicos robustos que soportan crecimiento exponencial".into(),
                ),
                item(
                    "Optimización Avanzada",
                    "Performance tuning y optimización de recursos críticos".into(),
                ),
                item(
                    "Integración Compleja",
                    "Conectividad seamless entre sistemas enterprise".into(),
                ),
            ],
        },
        about: AboutCopy {
            title: format!("Expertise Técnico {}", brand.name),
            description: format!(
                "Nuestro equipo combina profundo conocimiento técnico con experiencia \
                 práctica en implementaciones enterprise. Especializados en arquitecturas \
                 complejas y soluciones de alta disponibilidad en {}.",
                brand.industry
            ),
            values: values_or(brief, "Precisión técnica, innovación y excelencia operacional"),
        },
        contact: ContactCopy {
            title: "Consultoría Técnica Especializada".into(),
            subtitle: "Analicemos los requerimientos técnicos de su proyecto".into(),
            description: "Nuestros arquitectos senior están disponibles para deep-dive \
                          técnicos y diseño de soluciones."
                .into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::build_brief;
    use crate::brief::types::{BrandInfo, ProjectAnswers, ProjectKind};

    fn brief_with_tone(tone: Tone) -> Brief {
        let project = ProjectAnswers {
            kind: ProjectKind::Landing,
            goal: Some("Vender un producto".into()),
            sections: vec!["Hero con CTA".into()],
        };
        let brand = BrandInfo {
            brand_name: "Nova".into(),
            tagline: None,
            industry: "SaaS".into(),
            target_audience: "equipos remotos".into(),
            brand_values: None,
            tone,
            primary_color: "#123456".into(),
            has_logo: false,
        };
        build_brief(&[], &project, &brand, 9200)
    }

    #[test]
    fn formal_hero_interpolates_brand() {
        let sections = sections_for(&brief_with_tone(Tone::Formal));
        assert_eq!(sections.hero.title, "Excelencia en SaaS");
        assert!(sections.hero.subtitle.starts_with("Nova ofrece"));
        assert_eq!(sections.features.items.len(), 3);
    }

    #[test]
    fn playful_copy_keeps_its_energy() {
        let sections = sections_for(&brief_with_tone(Tone::Playful));
        assert_eq!(sections.hero.title, "¡Energía pura en SaaS!");
        assert_eq!(sections.contact.title, "¡Conectemos!");
    }

    #[test]
    fn missing_values_fall_back_per_tone() {
        let sections = sections_for(&brief_with_tone(Tone::Elegant));
        assert_eq!(
            sections.about.values,
            "Elegancia, exclusividad y perfección en cada detalle"
        );
    }

    #[test]
    fn explicit_values_survive() {
        let mut brief = brief_with_tone(Tone::Formal);
        brief.brand.values = Some("rapidez y foco".into());
        assert_eq!(sections_for(&brief).about.values, "rapidez y foco");
    }

    #[test]
    fn ctas_merge_goal_then_tone_capped_at_five() {
        let brief = brief_with_tone(Tone::Technical);
        let ctas = merge_ctas(&brief);
        assert_eq!(
            ctas,
            vec![
                "Comprar Ahora",
                "Ver Precios",
                "Obtener Acceso",
                "Implementar Solución",
                "Analizar Requerimientos"
            ]
        );
    }

    #[test]
    fn website_ctas_leave_room_for_one_tone_entry() {
        let mut brief = brief_with_tone(Tone::Friendly);
        brief.content.cta =
            vec!["Contactar".into(), "Conocer Más".into(), "Empezar".into(), "Ver Portfolio".into()];
        let ctas = merge_ctas(&brief);
        assert_eq!(ctas.len(), 5);
        assert_eq!(ctas[4], "Charlemos");
    }
}
