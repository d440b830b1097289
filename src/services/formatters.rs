//! Country and text formatting helpers
//!
//! Pure functions used by the use-cases and the HTTP layer.

use std::cmp::Ordering;

use crate::models::COUNTRY_NAMES;

/// Glyph returned when a country code cannot be turned into a flag
pub const PLACEHOLDER_FLAG: &str = "📺";

/// Offset from an uppercase ASCII letter to its regional indicator symbol
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Convert an ISO 3166-1 alpha-2 code to its flag emoji.
///
/// Anything other than exactly two ASCII letters yields [`PLACEHOLDER_FLAG`].
pub fn country_flag(code: &str) -> String {
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => [a, b]
            .iter()
            .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_OFFSET + c.to_ascii_uppercase() as u32))
            .collect(),
        _ => PLACEHOLDER_FLAG.to_string(),
    }
}

/// Spanish display name for a country code, or the code itself when unknown
pub fn country_name(code: &str) -> String {
    COUNTRY_NAMES
        .get(code)
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Upper-case the first character of `text`
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accent-folded, lower-cased key for ordering display names
pub fn collation_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Compare two display names the way a reader expects them sorted
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
