//! Full-name (nume) extraction from recognized card text.

use super::patterns::NUME_PATTERN;

/// Extract the holder's name: the capitalized-word sequence following the
/// "Nume"/"Surname" label. First match wins.
pub fn extract_nume(text: &str) -> Option<String> {
    NUME_PATTERN
        .captures(text)
        .map(|caps| caps["nume"].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_label() {
        assert_eq!(
            extract_nume("Nume Popescu Ion"),
            Some("Popescu Ion".to_string())
        );
    }

    #[test]
    fn test_bilingual_label() {
        assert_eq!(
            extract_nume("Numele/Surname Popescu Ion\nDomiciliu Str. X"),
            Some("Popescu Ion".to_string())
        );
    }

    #[test]
    fn test_ocr_split_surname_label() {
        assert_eq!(
            extract_nume("Nume/Sur name Ionescu"),
            Some("Ionescu".to_string())
        );
    }

    #[test]
    fn test_diacritic_names() {
        assert_eq!(
            extract_nume("Nume Ștefănescu Ană"),
            Some("Ștefănescu Ană".to_string())
        );
    }

    #[test]
    fn test_hyphenated_given_name() {
        assert_eq!(
            extract_nume("Nume Pop Ana-maria"),
            Some("Pop Ana-maria".to_string())
        );
    }

    #[test]
    fn test_name_starting_with_sur_is_not_eaten_by_label() {
        assert_eq!(extract_nume("Nume Surdu Dan"), Some("Surdu Dan".to_string()));
    }

    #[test]
    fn test_no_label_no_match() {
        assert_eq!(extract_nume("CARTE DE IDENTITATE seria XT"), None);
    }

    #[test]
    fn test_label_without_capitalized_value_no_match() {
        assert_eq!(extract_nume("Nume \n"), None);
    }
}
