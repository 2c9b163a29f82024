use crate::models::Symbology;

/// Length of a symbology identifier (`]` + code character + modifier)
pub const IDENTIFIER_LEN: usize = 3;

/// Strip a leading symbology identifier
///
/// Returns the recognized symbology and the remaining text, or `None` and
/// the text untouched.
pub fn strip_symbology(text: &str) -> (Option<Symbology>, &str) {
    let Some(id) = text.get(..IDENTIFIER_LEN) else {
        return (None, text);
    };
    match Symbology::from_identifier(id) {
        Some(symbology) => (Some(symbology), &text[IDENTIFIER_LEN..]),
        None => (None, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_known_prefix() {
        assert_eq!(
            strip_symbology("]C10112345678901231"),
            (Some(Symbology::Gs1_128), "0112345678901231")
        );
        assert_eq!(
            strip_symbology("]d2010"),
            (Some(Symbology::Gs1DataMatrix), "010")
        );
        assert_eq!(strip_symbology("]q3"), (Some(Symbology::Gs1Qr), ""));
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(strip_symbology("0112345678901231"), (None, "0112345678901231"));
        assert_eq!(strip_symbology("]E00123"), (None, "]E00123"));
        assert_eq!(strip_symbology("]C"), (None, "]C"));
        assert_eq!(strip_symbology(""), (None, ""));
    }

    #[test]
    fn test_multibyte_input() {
        // Index 3 falls inside a multi-byte character
        assert_eq!(strip_symbology("]aé"), (None, "]aé"));
    }
}
