use url::Url;

use super::types::Platform;

/// Detect which platform a reference URL belongs to. Substring match on the
/// host, same as the intake validation accepts.
pub fn platform_for_url(url: &str) -> Platform {
    if url.contains("behance.net") {
        Platform::Behance
    } else if url.contains("dribbble.com") {
        Platform::Dribbble
    } else {
        Platform::None
    }
}

/// Numeric project/shot id from a platform URL: the leading digits of the
/// segment after `gallery` (Behance) or `shots` (Dribbble). `None` for
/// anything else.
pub fn gallery_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.collect();

    match platform_for_url(url) {
        Platform::Behance => id_after(&segments, "gallery"),
        Platform::Dribbble => id_after(&segments, "shots"),
        Platform::None => None,
    }
}

fn id_after(segments: &[&str], marker: &str) -> Option<String> {
    let idx = segments.iter().position(|s| *s == marker)?;
    let digits: String =
        segments.get(idx + 1)?.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { Some(digits) }
}
