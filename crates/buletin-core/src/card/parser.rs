//! Parsers turning raw text into the three-field record.

use tracing::debug;

use crate::models::record::CardFields;

use super::rules::patterns::{REPLY_CNP, REPLY_DOMICILIU, REPLY_NUME};
use super::rules::{extract_cnp, extract_domiciliu, extract_nume};

/// Parse raw OCR output into card fields.
///
/// The three pattern searches run independently against the full text;
/// a field with no match gets the "N/A" sentinel. Never fails.
pub fn parse_ocr_text(text: &str) -> CardFields {
    let fields = CardFields {
        nume: extract_nume(text).unwrap_or_else(|| CardFields::NOT_FOUND.to_string()),
        domiciliu: extract_domiciliu(text).unwrap_or_else(|| CardFields::NOT_FOUND.to_string()),
        cnp: extract_cnp(text).unwrap_or_else(|| CardFields::NOT_FOUND.to_string()),
    };

    debug!(
        "Parsed OCR text ({} chars): nume={:?} domiciliu={:?} cnp={:?}",
        text.len(),
        fields.nume,
        fields.domiciliu,
        fields.cnp
    );

    fields
}

/// Parse the vision model's constrained reply format:
/// `NUME: ... ; DOMICILIU: ... ; CNP: ...`.
///
/// Each labeled value runs to the next semicolon (or end of string) and is
/// trimmed. A missing label yields the "N/A" sentinel for that field only.
pub fn parse_model_reply(reply: &str) -> CardFields {
    let labeled = |pattern: &regex::Regex| {
        pattern
            .captures(reply)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_else(|| CardFields::NOT_FOUND.to_string())
    };

    CardFields {
        nume: labeled(&REPLY_NUME),
        domiciliu: labeled(&REPLY_DOMICILIU),
        cnp: labeled(&REPLY_CNP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ocr_text_complete_card() {
        let text = "ROMANIA CARTE DE IDENTITATE\n\
                    Nume/Surname Popescu Ion\n\
                    Domiciliul/Address Str. Exemplu nr. 1\n\
                    CNP 1850413284573";

        let fields = parse_ocr_text(text);
        assert_eq!(fields.nume, "Popescu Ion");
        assert_eq!(fields.domiciliu, "Str. Exemplu nr. 1");
        assert_eq!(fields.cnp, "1850413284573");
    }

    #[test]
    fn test_parse_ocr_text_nothing_recognizable() {
        let fields = parse_ocr_text("::: garbled scan :::");
        assert_eq!(fields, CardFields::not_found());
    }

    #[test]
    fn test_parse_ocr_text_fields_are_independent() {
        let fields = parse_ocr_text("doar CNP 2930715123456 aici");
        assert_eq!(fields.nume, "N/A");
        assert_eq!(fields.domiciliu, "N/A");
        assert_eq!(fields.cnp, "2930715123456");
    }

    #[test]
    fn test_parse_model_reply_full() {
        let reply = "NUME: Ion Popescu ; DOMICILIU: Str. Exemplu nr. 1 ; CNP: 1234567890123";

        let fields = parse_model_reply(reply);
        assert_eq!(fields.nume, "Ion Popescu");
        assert_eq!(fields.domiciliu, "Str. Exemplu nr. 1");
        assert_eq!(fields.cnp, "1234567890123");
    }

    #[test]
    fn test_parse_model_reply_missing_labels() {
        let fields = parse_model_reply("NUME: Maria Enescu");
        assert_eq!(fields.nume, "Maria Enescu");
        assert_eq!(fields.domiciliu, "N/A");
        assert_eq!(fields.cnp, "N/A");
    }

    #[test]
    fn test_parse_model_reply_empty() {
        assert_eq!(parse_model_reply(""), CardFields::not_found());
    }
}
