//! National identification number (CNP) extraction.

use super::patterns::DIGIT_RUN;

/// Extract the CNP: the first (leftmost) run of exactly 13 consecutive
/// digits anywhere in the text. Longer digit runs are not CNPs.
///
/// No checksum validation is performed.
pub fn extract_cnp(text: &str) -> Option<String> {
    DIGIT_RUN
        .find_iter(text)
        .find(|m| m.as_str().len() == 13)
        .map(|m| m.as_str().to_string())
}
