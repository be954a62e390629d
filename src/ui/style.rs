use console::style;
use std::fmt::Display;

/// Green bold for checkmarks and completed steps.
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold for titles and field headings.
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim for secondary text and progress chatter.
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow for shell commands and degraded-run notices.
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Yellow bold for warning markers.
pub fn warn<D: Display>(text: D) -> String {
    style(text).yellow().bold().to_string()
}

/// Green for confirmed values, paths and names.
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan for labels and inline accents.
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Cyan underlined for URLs.
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}
