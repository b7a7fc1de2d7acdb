use super::money::Money;
use std::fmt;

/// One row of payroll input, exactly as loaded.
///
/// Compensation fields are `None` when the source cell was absent or could
/// not be read as a number. They are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeRecord {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub basic_salary: Option<Money>,
    pub allowances: Option<Money>,
    pub deductions: Option<Money>,
}

impl EmployeeRecord {
    /// Identifier used in warnings, `Unknown` when the row has none.
    pub fn display_id(&self) -> &str {
        self.employee_id.as_deref().unwrap_or("Unknown")
    }

    /// True when every field is empty, e.g. a trailing spreadsheet row.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// basic + allowances - deductions, or `None` if the result overflows.
pub fn net_salary(basic_salary: Money, allowances: Money, deductions: Money) -> Option<Money> {
    basic_salary.checked_add(allowances)?.checked_sub(deductions)
}

/// Validated salary inputs together with the derived net salary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compensation {
    pub basic_salary: Money,
    pub allowances: Money,
    pub deductions: Money,
    pub net_salary: Money,
}

impl Compensation {
    /// Returns `None` if any of the three inputs is missing or the net
    /// salary cannot be represented.
    pub fn from_record(record: &EmployeeRecord) -> Option<Self> {
        let basic_salary = record.basic_salary?;
        let allowances = record.allowances?;
        let deductions = record.deductions?;
        Some(Self {
            basic_salary,
            allowances,
            deductions,
            net_salary: net_salary(basic_salary, allowances, deductions)?,
        })
    }
}

/// Why a record was left out of rendering and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingName,
    MissingCompensation,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "missing employee name"),
            SkipReason::MissingCompensation => write!(f, "missing or invalid salary data"),
        }
    }
}

/// A record that passed validation, ready to be rendered and mailed.
///
/// Read-only: built once from an [`EmployeeRecord`] and its [`Compensation`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedEmployee {
    employee_id: Option<String>,
    name: String,
    email: Option<String>,
    compensation: Compensation,
}

impl ProcessedEmployee {
    pub fn from_record(record: &EmployeeRecord) -> Result<Self, SkipReason> {
        let compensation =
            Compensation::from_record(record).ok_or(SkipReason::MissingCompensation)?;
        let name = record
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .ok_or(SkipReason::MissingName)?;

        Ok(Self {
            employee_id: record.employee_id.clone(),
            name,
            email: record.email.clone(),
            compensation,
        })
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }
}
