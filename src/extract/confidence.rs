use crate::extract::field::Field;
use crate::parsers::text::{char_len, count_punctuation};

/// Number of signals that must hold before a value is accepted
pub const REQUIRED_SIGNALS: usize = 2;

/// Texts shorter than this (in chars) may be a standalone tag
const STANDALONE_MAX_LEN: usize = 25;
/// Texts shorter than this count as short on their own
const SHORT_MAX_LEN: usize = 20;

/// Independent signals that a candidate text really carries the field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceSignals {
    /// Short and lightly punctuated, like "72 m²" rather than prose
    pub standalone: bool,
    /// The parsed value lies in the field's plausible range
    pub plausible: bool,
    /// The text is short
    pub short: bool,
}

impl ConfidenceSignals {
    pub fn evaluate(text: &str, value: Option<f64>, field: Field) -> Self {
        Self {
            standalone: looks_like_standalone(text),
            plausible: value.is_some_and(|v| field.is_plausible(v)),
            short: char_len(text) < SHORT_MAX_LEN,
        }
    }

    pub fn count(&self) -> usize {
        [self.standalone, self.plausible, self.short]
            .into_iter()
            .filter(|signal| *signal)
            .count()
    }

    /// Two out of three
    pub fn passes(&self) -> bool {
        self.count() >= REQUIRED_SIGNALS
    }
}

/// True for a short fragment with at most one punctuation mark
pub fn looks_like_standalone(text: &str) -> bool {
    !text.is_empty() && char_len(text) < STANDALONE_MAX_LEN && count_punctuation(text) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone() {
        assert!(looks_like_standalone("72 m²"));
        assert!(looks_like_standalone("1.200 €"));
        assert!(!looks_like_standalone("1.200,00 €"));
        assert!(!looks_like_standalone(""));
        assert!(!looks_like_standalone(
            "Helle Wohnung mit Balkon, 72 m², ruhige Lage"
        ));
    }

    #[test]
    fn test_gate_needs_two_signals() {
        let none = ConfidenceSignals {
            standalone: false,
            plausible: false,
            short: false,
        };
        assert_eq!(none.count(), 0);
        assert!(!none.passes());

        let one = ConfidenceSignals {
            plausible: true,
            ..none
        };
        assert!(!one.passes());

        let two = ConfidenceSignals {
            short: true,
            ..one
        };
        assert!(two.passes());
    }

    #[test]
    fn test_evaluate() {
        let signals = ConfidenceSignals::evaluate("72 m²", Some(72.0), Field::Area);
        assert_eq!(signals.count(), 3);

        let signals = ConfidenceSignals::evaluate("3 m²", Some(3.0), Field::Area);
        assert!(!signals.plausible);
        assert!(signals.passes());

        let prose = "Schöne 3-Zimmer-Wohnung, ca. 72 m², frisch renoviert!";
        let signals = ConfidenceSignals::evaluate(prose, Some(72.0), Field::Area);
        assert_eq!(signals.count(), 1);
        assert!(!signals.passes());
    }
}
