use crate::domain::employee::{EmployeeRecord, ProcessedEmployee};
use crate::domain::money::Money;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Sent,
    Skipped,
    RenderFailed,
    SendFailed,
}

/// What happened to one input record during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunEntry {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub net_salary: Option<Money>,
    pub status: RunStatus,
    pub detail: Option<String>,
}

impl RunEntry {
    pub fn skipped(record: &EmployeeRecord, detail: String) -> Self {
        Self {
            employee_id: record.employee_id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            net_salary: None,
            status: RunStatus::Skipped,
            detail: Some(detail),
        }
    }

    pub fn processed(employee: &ProcessedEmployee, status: RunStatus, detail: Option<String>) -> Self {
        Self {
            employee_id: employee.employee_id().map(str::to_string),
            name: Some(employee.name().to_string()),
            email: employee.email().map(str::to_string),
            net_salary: Some(employee.compensation().net_salary),
            status,
            detail,
        }
    }
}

/// Per-record outcomes of a run, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub entries: Vec<RunEntry>,
}

impl RunReport {
    pub fn count(&self, status: RunStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}
