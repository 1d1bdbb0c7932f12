use crate::parsers::text;

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(text::normalize_text(""), "");
        assert_eq!(text::normalize_text("   \n   \t   \r\n   "), "");
    }

    #[test]
    fn test_mixed_whitespace() {
        let input = "  Line 1  \n\n  Line 2  \t\r\n  Line 3  ";
        assert_eq!(text::normalize_text(input), "Line 1 Line 2 Line 3");
    }

    #[test]
    fn test_no_break_space_in_price() {
        assert_eq!(text::normalize_text("1.200\u{00A0}€"), "1.200 €");
        assert_eq!(text::normalize_text("72\u{202F}m²"), "72 m²");
    }

    #[test]
    fn test_thin_and_ideographic_spaces() {
        assert_eq!(text::normalize_text("\u{2009}2\u{3000}Zi.\u{2009}"), "2 Zi.");
    }

    #[test]
    fn test_segment_keeps_words() {
        assert_eq!(
            text::normalize_whitespace_in_segment("Helle   Wohnung\tmit  Balkon"),
            "Helle Wohnung mit Balkon"
        );
    }
}

#[cfg(test)]
mod measure_tests {
    use super::*;

    #[test]
    fn test_count_punctuation() {
        assert_eq!(text::count_punctuation("800 €"), 0);
        assert_eq!(text::count_punctuation("2 Zi."), 1);
        assert_eq!(text::count_punctuation("Ruhig, hell. Schön!"), 3);
        assert_eq!(text::count_punctuation("Wirklich?; ja"), 2);
    }

    #[test]
    fn test_colon_and_dash_are_not_punctuation() {
        assert_eq!(text::count_punctuation("Berlin - Mitte: 18:03"), 0);
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(text::char_len("m²"), 2);
        assert_eq!(text::char_len("Zurück"), 6);
        assert_eq!(text::char_len(""), 0);
    }
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_token_is_case_insensitive() {
        assert!(text::contains_token("Nächste Seite", "nächste"));
        assert!(text::contains_token("ZURÜCK", "zurück"));
        assert!(text::contains_token("zur vorherigen Seite", "Vorherige"));
    }

    #[test]
    fn test_missing_token() {
        assert!(!text::contains_token("Seite 2", "nächste"));
        assert!(!text::contains_token("", "nächste"));
    }
}
