/// Characters counted as punctuation when judging whether a text fragment
/// reads like a standalone tag or like prose
pub const PUNCTUATION: [char; 5] = ['.', ',', '!', '?', ';'];

/// Returns true for the exotic spaces the site sprinkles into prices and units
/// (no-break space, thin spaces, zero-width joiners, ideographic space)
fn is_exotic_space(c: char) -> bool {
    matches!(c, '\u{00A0}' | '\u{2000}'..='\u{200D}' | '\u{202F}' | '\u{205F}' | '\u{3000}')
}

/// Normalizes a text fragment pulled out of the DOM
///
/// This function:
/// - Replaces no-break and other typographic spaces with a plain space
/// - Collapses runs of whitespace into a single space
/// - Trims both ends
pub fn normalize_text(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if is_exotic_space(c) { ' ' } else { c })
        .collect();
    normalize_whitespace_in_segment(&replaced)
}

/// Normalizes whitespace within a single line or paragraph
pub fn normalize_whitespace_in_segment(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Counts punctuation marks from [`PUNCTUATION`]
pub fn count_punctuation(text: &str) -> usize {
    text.chars().filter(|c| PUNCTUATION.contains(c)).count()
}

/// Number of characters (not bytes), so `m²` and umlauts count once
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Case-insensitive substring test used for locale tokens ("Nächste", "Zurück")
pub fn contains_token(haystack: &str, token: &str) -> bool {
    haystack.to_lowercase().contains(&token.to_lowercase())
}
