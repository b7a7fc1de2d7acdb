use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayslipError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
    #[error("Workbook has no worksheets")]
    EmptyWorkbook,
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Mail error: {0}")]
    Mail(String),
}

pub type Result<T> = std::result::Result<T, PayslipError>;
