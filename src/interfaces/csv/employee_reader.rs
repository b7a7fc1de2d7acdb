use crate::domain::employee::EmployeeRecord;
use crate::domain::money::Money;
use crate::error::Result;
use crate::interfaces::columns::ColumnMap;
use serde::Deserialize;
use std::io::Read;

/// A CSV row after its headers have been canonicalized.
///
/// Every field is read as optional text; salary coercion happens afterwards
/// so that a non-numeric cell becomes a missing value instead of an error.
#[derive(Debug, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "Employee ID")]
    employee_id: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Email")]
    email: Option<String>,
    #[serde(rename = "Basic Salary")]
    basic_salary: Option<String>,
    #[serde(rename = "Allowances")]
    allowances: Option<String>,
    #[serde(rename = "Deductions")]
    deductions: Option<String>,
}

fn salary(raw: Option<String>) -> Option<Money> {
    raw.as_deref().and_then(Money::parse)
}

fn text(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

impl From<EmployeeRow> for EmployeeRecord {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: text(row.employee_id),
            name: text(row.name),
            email: text(row.email),
            basic_salary: salary(row.basic_salary),
            allowances: salary(row.allowances),
            deductions: salary(row.deductions),
        }
    }
}

/// Reads employee records from a CSV source.
///
/// Whitespace around fields and headers is trimmed and short rows are
/// tolerated; absent trailing cells count as missing values.
pub struct EmployeeCsvReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EmployeeCsvReader<R> {
    /// Creates a new `EmployeeCsvReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Validates the header row and loads every record in input order.
    pub fn records(mut self) -> Result<Vec<EmployeeRecord>> {
        let headers = self.reader.headers()?.clone();
        let columns = ColumnMap::from_headers(headers.iter())?;
        self.reader
            .set_headers(csv::StringRecord::from(columns.canonical_headers(headers.iter())));

        let mut records = Vec::new();
        for row in self.reader.into_deserialize::<EmployeeRow>() {
            let record = EmployeeRecord::from(row?);
            if !record.is_blank() {
                records.push(record);
            }
        }
        Ok(records)
    }
}
