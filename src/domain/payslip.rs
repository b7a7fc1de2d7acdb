use super::employee::ProcessedEmployee;
use std::path::{Path, PathBuf};

pub const PAYSLIP_EXTENSION: &str = "pdf";

const NOT_AVAILABLE: &str = "N/A";

/// The text content of a payslip, independent of the output format.
///
/// Renderers lay these lines out top to bottom: the title, then the identity
/// block, then the salary block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayslipDocument {
    pub title: String,
    pub identity: [String; 3],
    pub salary: [String; 4],
}

impl PayslipDocument {
    pub fn for_employee(employee: &ProcessedEmployee) -> Self {
        let pay = employee.compensation();
        Self {
            title: format!("Payslip for {}", employee.name()),
            identity: [
                format!(
                    "Employee ID: {}",
                    employee.employee_id().unwrap_or(NOT_AVAILABLE)
                ),
                format!("Name: {}", employee.name()),
                format!("Email: {}", employee.email().unwrap_or(NOT_AVAILABLE)),
            ],
            salary: [
                format!("Basic Salary: {}", pay.basic_salary),
                format!("Allowances: {}", pay.allowances),
                format!("Deductions: {}", pay.deductions),
                format!("Net Salary: {}", pay.net_salary),
            ],
        }
    }

    /// All lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.identity.iter().map(String::as_str))
            .chain(self.salary.iter().map(String::as_str))
    }
}

/// `Jane Doe` -> `Jane_Doe.pdf`.
///
/// Whitespace and path separators become underscores so the file always
/// lands directly inside the output directory.
pub fn payslip_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("{stem}.{PAYSLIP_EXTENSION}")
}

pub fn payslip_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(payslip_file_name(name))
}
