//! Static lookup tables shared by the consolidation steps.

pub const DEFAULT_PRIMARY: &str = "#0066FF";
pub const DEFAULT_SECONDARY: &str = "#64748B";
pub const DEFAULT_ACCENT: &str = "#10B981";

/// Gradient utility pairs every generated palette carries.
pub const GRADIENTS: [&str; 2] =
    ["from-blue-600 to-purple-600", "from-purple-500 to-pink-500"];

/// Industry keyword to primary color, matched by substring against the
/// lowercased industry. `fintech` sits before `tech` so it can win; every
/// other key is substring-free of the rest, so order is otherwise cosmetic.
pub const INDUSTRY_COLORS: [(&str, &str); 9] = [
    ("fintech", "#6C5CE7"),
    ("tech", "#0066FF"),
    ("saas", "#00CEC9"),
    ("crypto", "#7C3AED"),
    ("ecommerce", "#E17055"),
    ("health", "#2ECC71"),
    ("education", "#3498DB"),
    ("corporate", "#2C3E50"),
    ("startup", "#FF6348"),
];

/// Calls to action keyed by the landing-goal wizard option, verbatim.
pub const LANDING_GOAL_CTAS: [(&str, [&str; 3]); 6] = [
    (
        "Capturar leads (formularios)",
        ["Obtener Demo Gratis", "Empezar Ahora", "Solicitar Información"],
    ),
    ("Vender un producto", ["Comprar Ahora", "Ver Precios", "Obtener Acceso"]),
    (
        "Promocionar un servicio",
        ["Contratar Servicio", "Consulta Gratuita", "Más Información"],
    ),
    (
        "Lanzamiento de producto",
        ["Acceso Anticipado", "Registrarse", "Ser el Primero"],
    ),
    ("Evento o webinar", ["Registrarse Gratis", "Reservar Lugar", "Unirse Ahora"]),
    ("App download", ["Descargar App", "Probar Gratis", "Instalar Ahora"]),
];

/// Fallback calls to action for websites and unknown goals.
pub const WEBSITE_CTAS: [&str; 4] = ["Contactar", "Conocer Más", "Empezar", "Ver Portfolio"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fintech_is_listed_before_tech() {
        let fintech = INDUSTRY_COLORS.iter().position(|(k, _)| *k == "fintech");
        let tech = INDUSTRY_COLORS.iter().position(|(k, _)| *k == "tech");
        assert!(fintech < tech);
    }

    #[test]
    fn goal_table_covers_six_goals() {
        assert_eq!(LANDING_GOAL_CTAS.len(), 6);
        let (_, ctas) = LANDING_GOAL_CTAS
            .iter()
            .find(|(goal, _)| *goal == "Vender un producto")
            .unwrap();
        assert_eq!(ctas[0], "Comprar Ahora");
    }
}
