use crate::parsers::text::normalize_text;
use regex::Regex;
use std::sync::LazyLock;

/// Unit tokens removed before parsing: currency, square meters, rooms
static UNIT_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:€|m²|qm|Zi\.?)\s*").expect("valid unit token regex"));

/// Parses a German-formatted number out of a price/area/rooms text.
///
/// `"1.200 €"` gives 1200, `"72,5 m²"` gives 72.5. Dots are thousands
/// separators and the first comma is the decimal mark. Text with no digits
/// left gives `None`, never zero.
pub fn normalize_number(text: &str) -> Option<f64> {
    let text = normalize_text(text);
    if text.is_empty() {
        return None;
    }

    let without_units = UNIT_TOKENS.replace_all(&text, "");
    let without_thousands = without_units.replace('.', "");
    let with_decimal_point = without_thousands.replacen(',', ".", 1);
    let cleaned: String = with_decimal_point
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
