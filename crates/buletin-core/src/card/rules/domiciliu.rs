//! Address (domiciliu) extraction from recognized card text.

use super::patterns::DOMICILIU_PATTERN;

/// Extract the holder's address: everything after the
/// "Domiciliu"/"Address" label up to the next line break, trimmed.
/// A whitespace-only value counts as no match.
pub fn extract_domiciliu(text: &str) -> Option<String> {
    DOMICILIU_PATTERN
        .captures(text)
        .map(|caps| caps["domiciliu"].trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_stops_at_line_break() {
        let text = "Domiciliul/Address Str. Exemplu nr. 1\nLoc. București";
        assert_eq!(
            extract_domiciliu(text),
            Some("Str. Exemplu nr. 1".to_string())
        );
    }

    #[test]
    fn test_value_at_end_of_text() {
        assert_eq!(
            extract_domiciliu("Domiciliu Sat Izvoru, Com. Vedea"),
            Some("Sat Izvoru, Com. Vedea".to_string())
        );
    }

    #[test]
    fn test_value_on_following_line() {
        // OCR often breaks the line between label and value.
        let text = "Domiciliul/Address\nMun. Cluj-Napoca, Str. Horea nr. 2";
        assert_eq!(
            extract_domiciliu(text),
            Some("Mun. Cluj-Napoca, Str. Horea nr. 2".to_string())
        );
    }

    #[test]
    fn test_no_label_no_match() {
        assert_eq!(extract_domiciliu("Nume Popescu Ion"), None);
    }

    #[test]
    fn test_label_with_no_value_no_match() {
        assert_eq!(extract_domiciliu("Domiciliu   \n"), None);
    }
}
