use super::employee::ProcessedEmployee;
use std::path::{Path, PathBuf};

pub const PAYSLIP_SUBJECT: &str = "Your Payslip for This Month";

/// A composed payslip message with its single attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment: PathBuf,
}

impl PayslipEmail {
    /// Returns `None` when the employee has no email address on record.
    pub fn compose(employee: &ProcessedEmployee, attachment: &Path) -> Option<Self> {
        let to = employee.email()?.to_string();
        Some(Self {
            to,
            subject: PAYSLIP_SUBJECT.to_string(),
            body: payslip_body(employee.name()),
            attachment: attachment.to_path_buf(),
        })
    }
}

pub fn payslip_body(name: &str) -> String {
    format!(
        "Dear {name},\n\n\
         Please find attached your payslip for this month.\n\n\
         Best Regards,\n\
         Your Company\n"
    )
}
