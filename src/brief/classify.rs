//! Style and typography classification over the reference style tags.

use crate::reference::Reference;

use super::types::{FontFace, TypographyChoice};

/// Most frequent style tag, lowercased. Ties go to the tag seen first, and an
/// empty pool classifies as `"modern"`.
pub fn classify_style(references: &[Reference]) -> String {
    let tags = style_tags(references);
    if tags.is_empty() {
        return "modern".to_string();
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for tag in tags {
        match counts.iter_mut().find(|(seen, _)| *seen == tag) {
            Some((_, count)) => *count += 1,
            None => counts.push((tag, 1)),
        }
    }

    let mut winner = counts[0];
    for entry in &counts[1..] {
        if entry.1 > winner.1 {
            winner = *entry;
        }
    }
    winner.0.to_lowercase()
}

/// Maps style tags to a heading/body font pairing. Elegant cues outrank tech
/// cues; anything else reads as neutral.
pub fn classify_typography(references: &[Reference]) -> TypographyChoice {
    let tags: Vec<String> =
        style_tags(references).into_iter().map(str::to_lowercase).collect();
    let is_elegant = tags.iter().any(|t| t.contains("elegant") || t.contains("luxury"));
    let is_tech = tags.iter().any(|t| t.contains("tech") || t.contains("modern"));

    if is_elegant {
        TypographyChoice {
            headings: FontFace::new("Playfair Display, serif", "bold"),
            body: FontFace::new("Inter, sans-serif", "normal"),
        }
    } else if is_tech {
        TypographyChoice {
            headings: FontFace::new("Space Grotesk, sans-serif", "bold"),
            body: FontFace::new("Inter, sans-serif", "normal"),
        }
    } else {
        TypographyChoice {
            headings: FontFace::new("Inter, sans-serif", "bold"),
            body: FontFace::new("Inter, sans-serif", "normal"),
        }
    }
}

fn style_tags(references: &[Reference]) -> Vec<&str> {
    references
        .iter()
        .filter_map(|r| r.style.as_deref())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Platform;

    fn styled(style: &str) -> Reference {
        Reference::new("Ref", "https://behance.net/gallery/1/ref", Platform::Behance)
            .with_style(style)
    }

    #[test]
    fn majority_tag_wins_lowercased() {
        let refs =
            vec![styled("Minimalista"), styled("Brutalist"), styled("Minimalista")];
        assert_eq!(classify_style(&refs), "minimalista");
    }

    #[test]
    fn tie_keeps_first_seen_tag() {
        let refs = vec![styled("Corporativo"), styled("Startup")];
        assert_eq!(classify_style(&refs), "corporativo");
    }

    #[test]
    fn untagged_pool_reads_modern() {
        let refs =
            vec![Reference::new("Ref", "https://dribbble.com/shots/1", Platform::Dribbble)];
        assert_eq!(classify_style(&refs), "modern");
        assert_eq!(classify_style(&[]), "modern");
    }

    #[test]
    fn elegant_outranks_tech() {
        let refs = vec![styled("Moderno/Tech"), styled("Elegante/Luxury")];
        let typography = classify_typography(&refs);
        assert_eq!(typography.headings.family, "Playfair Display, serif");
        assert_eq!(typography.body.weight, "normal");
    }

    #[test]
    fn tech_tags_pick_grotesk() {
        let typography = classify_typography(&[styled("Moderno/Tech")]);
        assert_eq!(typography.headings.family, "Space Grotesk, sans-serif");
        assert_eq!(typography.headings.weight, "bold");
    }

    #[test]
    fn neutral_pool_stays_on_inter() {
        let typography = classify_typography(&[styled("E-commerce")]);
        assert_eq!(typography.headings.family, "Inter, sans-serif");
        assert_eq!(typography.body.family, "Inter, sans-serif");
    }
}
