/// Two team colors closer than this (Euclidean RGB distance) are too
/// similar to sit side by side.
pub const SIMILARITY_THRESHOLD: f64 = 100.0;

/// Validate a team color string: exactly 6 hex digits after stripping a
/// leading '#'. Anything else, including absent, defaults to white.
pub fn validate_color(raw: Option<&str>) -> String {
    match raw {
        Some(value) => {
            let hex = value.strip_prefix('#').unwrap_or(value);
            if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                format!("#{}", hex)
            } else {
                "#ffffff".to_string()
            }
        }
        None => "#ffffff".to_string(),
    }
}

/// Euclidean distance between two colors in RGB space. Unparseable input
/// counts as maximally distant, so it never triggers a substitution.
pub fn color_distance(a: &str, b: &str) -> f64 {
    match (parse_rgb(a), parse_rgb(b)) {
        (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
            let dr = f64::from(r1) - f64::from(r2);
            let dg = f64::from(g1) - f64::from(g2);
            let db = f64::from(b1) - f64::from(b2);
            (dr * dr + dg * dg + db * db).sqrt()
        }
        _ => f64::MAX,
    }
}

/// Whether two colors are visually too close to distinguish.
pub fn colors_similar(a: &str, b: &str, threshold: f64) -> bool {
    color_distance(a, b) < threshold
}

/// The home team's display color for a head-to-head view: when the two
/// primary colors collide, fall back to the home alternate color.
pub fn contrast_adjusted(
    home_color: &str,
    home_alt_color: &str,
    away_color: &str,
    threshold: f64,
) -> String {
    if colors_similar(home_color, away_color, threshold) {
        home_alt_color.to_string()
    } else {
        home_color.to_string()
    }
}

fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    Some((
        u8::from_str_radix(&hex[0..2], 16).ok()?,
        u8::from_str_radix(&hex[2..4], 16).ok()?,
        u8::from_str_radix(&hex[4..6], 16).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_color() {
        assert_eq!(validate_color(Some("#ZZZZZZ")), "#ffffff");
        assert_eq!(validate_color(None), "#ffffff");
        assert_eq!(validate_color(Some("1a2b3c")), "#1a2b3c");
        assert_eq!(validate_color(Some("#9E1B32")), "#9E1B32");
        assert_eq!(validate_color(Some("#fff")), "#ffffff");
        assert_eq!(validate_color(Some("")), "#ffffff");
    }

    #[test]
    fn test_similarity_threshold() {
        assert!(colors_similar("#000000", "#000000", SIMILARITY_THRESHOLD));
        // Black vs white: distance ≈ 441, well past the threshold
        assert!(!colors_similar("#000000", "#ffffff", SIMILARITY_THRESHOLD));
        let distance = color_distance("#000000", "#ffffff");
        assert!((distance - 441.67).abs() < 0.01);
    }

    #[test]
    fn test_contrast_substitutes_alternate() {
        // Crimson vs a near-identical red: use the alternate
        assert_eq!(
            contrast_adjusted("#9E1B32", "#828A8F", "#A01C30", SIMILARITY_THRESHOLD),
            "#828A8F"
        );
        // Crimson vs navy: primary stands
        assert_eq!(
            contrast_adjusted("#9E1B32", "#828A8F", "#0C2340", SIMILARITY_THRESHOLD),
            "#9E1B32"
        );
    }

    #[test]
    fn test_unparseable_color_never_similar() {
        assert!(!colors_similar("N/A", "#000000", SIMILARITY_THRESHOLD));
    }
}
