//! Extraction record produced for each processed ID-card image.

use serde::{Deserialize, Serialize};

/// The three fields read off a Romanian identity card.
///
/// Every field always holds exactly one value; a field the extraction could
/// not determine holds a sentinel instead of being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    /// Full name (nume).
    pub nume: String,

    /// Full address (domiciliu).
    pub domiciliu: String,

    /// National identification number (CNP), 13 digits.
    pub cnp: String,
}

impl CardFields {
    /// Sentinel for a field the extraction looked for but did not find.
    pub const NOT_FOUND: &'static str = "N/A";

    /// Sentinel for a file whose remote extraction call failed outright.
    pub const ERROR: &'static str = "Error";

    pub fn new(
        nume: impl Into<String>,
        domiciliu: impl Into<String>,
        cnp: impl Into<String>,
    ) -> Self {
        Self {
            nume: nume.into(),
            domiciliu: domiciliu.into(),
            cnp: cnp.into(),
        }
    }

    /// All three fields set to the "not found" sentinel.
    pub fn not_found() -> Self {
        Self::new(Self::NOT_FOUND, Self::NOT_FOUND, Self::NOT_FOUND)
    }

    /// All three fields set to the "Error" sentinel.
    pub fn error() -> Self {
        Self::new(Self::ERROR, Self::ERROR, Self::ERROR)
    }
}

/// One row of batch output: the source filename plus the extracted fields.
///
/// Records are immutable once produced and held in processing order for the
/// duration of a batch run; persistence is the spreadsheet writer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// File name (not the full path) of the source image.
    pub filename: String,

    /// The extracted field values.
    #[serde(flatten)]
    pub fields: CardFields,
}

impl ExtractionRecord {
    pub fn new(filename: impl Into<String>, fields: CardFields) -> Self {
        Self {
            filename: filename.into(),
            fields,
        }
    }
}
