use crate::domain::employee::EmployeeRecord;
use crate::error::{PayslipError, Result};
use crate::interfaces::csv::employee_reader::EmployeeCsvReader;
use crate::interfaces::spreadsheet::employee_reader::EmployeeSheetReader;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Loads every employee record from `path`, picking the reader by extension.
///
/// Fails before returning anything if the file is missing, unreadable,
/// malformed or lacks a required column.
pub fn load_employees(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let records = if extension == "csv" {
        EmployeeCsvReader::new(File::open(path)?).records()?
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        // Surface a plain "not found" instead of a format-specific error.
        std::fs::metadata(path)?;
        EmployeeSheetReader::open(path)?.records()?
    } else {
        return Err(PayslipError::UnsupportedFormat(path.display().to_string()));
    };

    debug!(count = records.len(), path = %path.display(), "loaded employee records");
    Ok(records)
}
