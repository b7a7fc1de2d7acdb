use crate::domain::employee::EmployeeRecord;
use crate::domain::money::Money;
use crate::error::{PayslipError, Result};
use crate::interfaces::columns::{Column, ColumnMap};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

/// Reads employee records from the first worksheet of a workbook.
///
/// The first row is the header row. Any format `calamine` can open works:
/// xlsx, xlsm, xlsb, xls and ods.
pub struct EmployeeSheetReader {
    range: Range<Data>,
}

impl EmployeeSheetReader {
    pub fn open(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(PayslipError::EmptyWorkbook)??;
        Ok(Self::from_range(range))
    }

    pub fn from_range(range: Range<Data>) -> Self {
        Self { range }
    }

    pub fn records(&self) -> Result<Vec<EmployeeRecord>> {
        let mut rows = self.range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .unwrap_or_default();
        let columns = ColumnMap::from_headers(headers.iter().map(String::as_str))?;

        let records = rows
            .map(|row| {
                let cell = |column: Column| columns.index(column).and_then(|i| row.get(i));
                EmployeeRecord {
                    employee_id: cell_text(cell(Column::EmployeeId)),
                    name: cell_text(cell(Column::Name)),
                    email: cell_text(cell(Column::Email)),
                    basic_salary: cell_money(cell(Column::BasicSalary)),
                    allowances: cell_money(cell(Column::Allowances)),
                    deductions: cell_money(cell(Column::Deductions)),
                }
            })
            .filter(|record| !record.is_blank())
            .collect();
        Ok(records)
    }
}

/// Identity cells as trimmed text. Whole floats lose their `.0` so that a
/// numeric id such as `1001` does not render as `1001.0`.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    let text = match cell? {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (*f as i64).to_string()
        }
        other => other.to_string().trim().to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Salary cells: numbers pass through, numeric text is parsed, everything
/// else (booleans, dates, errors, free text) is missing.
fn cell_money(cell: Option<&Data>) -> Option<Money> {
    match cell? {
        Data::Int(i) => Some(Money::from(*i)),
        Data::Float(f) => Money::from_f64(*f),
        Data::String(s) => Money::parse(s),
        _ => None,
    }
}
