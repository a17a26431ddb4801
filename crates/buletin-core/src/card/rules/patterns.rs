//! Common regex patterns for Romanian ID-card extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Name: "Nume"/"Numele" label, optional slash-separated bilingual
    // "Surname" variant (OCR may split it as "Sur name"), then one or more
    // capitalized words. Romanian uppercase/lowercase diacritics included.
    // Words must sit on one line; capitalized labels on following lines are
    // not part of the name.
    pub static ref NUME_PATTERN: Regex = Regex::new(
        r"Nume(?:le)?\s*/?\s*(?:[Ss]ur\s*name)?\s*(?P<nume>[A-ZĂÂÎȘȚ][a-zăâîșț\-]+(?:[ \t]+[A-ZĂÂÎȘȚ][a-zăâîșț\-]+)*)"
    ).unwrap();

    // Address: "Domiciliu"/"Domiciliul" label, optional "/Address" variant,
    // value runs to the next line break.
    pub static ref DOMICILIU_PATTERN: Regex = Regex::new(
        r"Domiciliul?\s*/?\s*(?:[Aa]ddress)?\s*(?P<domiciliu>[^\n]*)"
    ).unwrap();

    // CNP candidates: maximal ASCII digit runs; the extractor keeps the
    // first run of exactly 13 digits.
    pub static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();

    // Labeled fields in the vision model's constrained reply format:
    // "NUME: ... ; DOMICILIU: ... ; CNP: ...".
    pub static ref REPLY_NUME: Regex = Regex::new(r"NUME:\s*([^;]+)").unwrap();

    pub static ref REPLY_DOMICILIU: Regex = Regex::new(r"DOMICILIU:\s*([^;]+)").unwrap();

    pub static ref REPLY_CNP: Regex = Regex::new(r"CNP:\s*([^;]+)").unwrap();
}
