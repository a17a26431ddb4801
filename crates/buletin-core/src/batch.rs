//! Sequential batch driver over a directory of card images.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::card::CardExtractor;
use crate::error::BatchError;
use crate::models::record::ExtractionRecord;

/// Recognized image extensions, matched case-insensitively against the
/// end of the file name.
pub const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Progress report emitted before each file is processed.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Zero-based index of the current file.
    pub index: usize,

    /// Total number of files in this batch.
    pub total: usize,

    /// Name of the file being processed.
    pub filename: String,
}

impl BatchProgress {
    /// Completion percentage counting the current file.
    pub fn percent(&self) -> f64 {
        (self.index + 1) as f64 / self.total as f64 * 100.0
    }

    /// Human-readable status text.
    pub fn status(&self) -> String {
        format!("Processing {}...", self.filename)
    }
}

/// Enumerate image files in `dir`, in directory-listing order.
///
/// The order is filesystem-dependent and not guaranteed stable across
/// platforms; callers must not rely on it.
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_lowercase();
        if IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            files.push(path);
        }
    }

    Ok(files)
}

/// Run the selected extractor over every image in `dir`, appending one
/// record per file in enumeration order.
///
/// A directory with no matching files yields [`BatchError::EmptyInput`],
/// distinct from processing errors. Any extractor failure aborts the
/// remaining batch.
pub fn run_batch<E: CardExtractor + ?Sized>(
    dir: &Path,
    extractor: &E,
    mut on_progress: impl FnMut(&BatchProgress),
) -> Result<Vec<ExtractionRecord>, BatchError> {
    let files = list_image_files(dir)?;
    if files.is_empty() {
        return Err(BatchError::EmptyInput);
    }

    info!("Processing {} image files from {}", files.len(), dir.display());

    let total = files.len();
    let mut records = Vec::with_capacity(total);

    for (index, path) in files.iter().enumerate() {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        on_progress(&BatchProgress {
            index,
            total,
            filename: filename.clone(),
        });

        let fields = extractor.extract(path).map_err(|source| BatchError::File {
            filename: filename.clone(),
            source,
        })?;

        debug!("Extracted fields from {}", filename);
        records.push(ExtractionRecord::new(filename, fields));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BuletinError, Result};
    use crate::models::record::CardFields;
    use pretty_assertions::assert_eq;

    /// Extractor that derives fields from the file name; fails on demand.
    struct StubExtractor;

    impl CardExtractor for StubExtractor {
        fn extract(&self, image_path: &Path) -> Result<CardFields> {
            let name = image_path.file_name().unwrap().to_string_lossy();
            if name.starts_with("bad") {
                return Err(BuletinError::Config("stub failure".to_string()));
            }
            Ok(CardFields::new(name.to_string(), "N/A", "N/A"))
        }
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_empty_directory_is_distinct_condition() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt");

        let result = run_batch(dir.path(), &StubExtractor, |_| {});
        assert!(matches!(result, Err(BatchError::EmptyInput)));
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "b.PNG");
        touch(dir.path(), "c.Jpeg");
        touch(dir.path(), "d.gif");
        touch(dir.path(), "notes.txt");

        let files = list_image_files(dir.path()).unwrap();
        let mut names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, ["a.jpg", "b.PNG", "c.Jpeg"]);
    }

    #[test]
    fn test_one_record_per_file_with_filenames() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.jpg");
        touch(dir.path(), "two.png");
        touch(dir.path(), "three.jpeg");

        let records = run_batch(dir.path(), &StubExtractor, |_| {}).unwrap();
        assert_eq!(records.len(), 3);

        let mut filenames: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
        filenames.sort();
        assert_eq!(filenames, ["one.jpg", "three.jpeg", "two.png"]);

        // Each record carries the fields extracted for its own file.
        for record in &records {
            assert_eq!(record.fields.nume, record.filename);
        }
    }

    #[test]
    fn test_progress_reported_per_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.jpg");
        touch(dir.path(), "two.jpg");

        let mut reports = Vec::new();
        run_batch(dir.path(), &StubExtractor, |p| {
            reports.push((p.index, p.total, p.filename.clone()));
        })
        .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].0, 0);
        assert_eq!(reports[1].0, 1);
        assert!(reports.iter().all(|(_, total, _)| *total == 2));
    }

    #[test]
    fn test_extractor_failure_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "bad.jpg");

        let result = run_batch(dir.path(), &StubExtractor, |_| {});
        match result {
            Err(BatchError::File { filename, .. }) => assert_eq!(filename, "bad.jpg"),
            other => panic!("expected file error, got {other:?}"),
        }
    }

    #[test]
    fn test_progress_percent_and_status() {
        let progress = BatchProgress {
            index: 1,
            total: 4,
            filename: "card.jpg".to_string(),
        };
        assert_eq!(progress.percent(), 50.0);
        assert_eq!(progress.status(), "Processing card.jpg...");
    }
}
