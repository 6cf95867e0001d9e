//! Fallback cover colours

use uuid::Uuid;

/// Mid-range hex digits used for generated colours
const COLOR_DIGITS: &[u8] = b"789ABCD";

/// A random `#RRGGBB` colour built from mid-range hex digits
pub fn random_cover_color() -> String {
    let bytes = Uuid::new_v4().into_bytes();
    let mut color = String::with_capacity(7);
    color.push('#');
    for b in &bytes[..6] {
        color.push(COLOR_DIGITS[*b as usize % COLOR_DIGITS.len()] as char);
    }
    color
}

/// Whether `color` is a `#RRGGBB` hex string
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
