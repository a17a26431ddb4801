//! Spreadsheet output: one sheet, a header row, one row per record.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use buletin_core::ExtractionRecord;

/// Column headers, in output order.
pub const HEADERS: [&str; 4] = ["Filename", "Nume", "Domiciliu", "CNP"];

/// Supported spreadsheet formats.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SheetFormat {
    /// Excel workbook with a single sheet
    Xlsx,
    /// Comma-separated values
    Csv,
}

/// Write all records to `path` in the requested format.
pub fn write(path: &Path, format: SheetFormat, records: &[ExtractionRecord]) -> anyhow::Result<()> {
    debug!("Writing {} records to {}", records.len(), path.display());

    match format {
        SheetFormat::Xlsx => write_xlsx(path, records),
        SheetFormat::Csv => write_csv(path, records),
    }
}

fn write_xlsx(path: &Path, records: &[ExtractionRecord]) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row, record) in records.iter().enumerate() {
        let row = row as u32 + 1;
        worksheet.write_string(row, 0, record.filename.as_str())?;
        worksheet.write_string(row, 1, record.fields.nume.as_str())?;
        worksheet.write_string(row, 2, record.fields.domiciliu.as_str())?;
        worksheet.write_string(row, 3, record.fields.cnp.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_csv(path: &Path, records: &[ExtractionRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADERS)?;

    for record in records {
        writer.write_record([
            record.filename.as_str(),
            record.fields.nume.as_str(),
            record.fields.domiciliu.as_str(),
            record.fields.cnp.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
