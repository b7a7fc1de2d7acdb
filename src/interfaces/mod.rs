//! Adapters between the outside world and the payroll domain: input loaders
//! for spreadsheets and CSV exports, and the CSV run report.

pub mod columns;
pub mod csv;
pub mod loader;
pub mod spreadsheet;
