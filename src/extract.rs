// src/extract.rs
//! Numeric rate normalization.
//!
//! Pure text → decimal-string routine shared by every site adapter. Sites
//! publish rates as "88,60", "88.60 руб.", "USD: 88" and similar; the
//! patterns below are tried in order and the first match wins, with a comma
//! decimal separator normalized to a dot.

use once_cell::sync::Lazy;
use regex::Regex;

static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+[.,]\d+", // 88.60 or 88,60
        r"\d+\.\d+",   // 88.60
        r"\d+,\d+",    // 88,60
        r"\d+",        // 88
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Extract a normalized rate from raw anchor text.
///
/// Empty input and the literal placeholder "-" mean "no value published";
/// anything else that matches no numeric pattern also yields `None`.
pub fn extract_rate(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }

    // Sites pad digit groups with regular and non-breaking spaces.
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

    for re in PATTERNS.iter() {
        if let Some(m) = re.find(&compact) {
            return Some(m.as_str().replace(',', "."));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separator_becomes_dot() {
        assert_eq!(extract_rate("88,60"), Some("88.60".to_string()));
    }

    #[test]
    fn dot_separator_is_kept() {
        assert_eq!(extract_rate("101.25"), Some("101.25".to_string()));
    }

    #[test]
    fn bare_integer_is_accepted() {
        assert_eq!(extract_rate("123"), Some("123".to_string()));
    }

    #[test]
    fn placeholder_and_empty_yield_none() {
        assert_eq!(extract_rate("-"), None);
        assert_eq!(extract_rate(""), None);
        assert_eq!(extract_rate("   "), None);
    }

    #[test]
    fn surrounding_text_is_ignored() {
        assert_eq!(extract_rate("EUR: 92,10 руб."), Some("92.10".to_string()));
        assert_eq!(extract_rate("1 085,50"), Some("1085.50".to_string()));
    }

    #[test]
    fn non_numeric_text_yields_none() {
        assert_eq!(extract_rate("курс уточняйте"), None);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = extract_rate("88,60");
        let b = extract_rate("88,60");
        assert_eq!(a, b);
    }
}
