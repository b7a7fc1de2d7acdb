use super::dispatcher::{DispatchOutcome, PayslipDispatcher};
use super::report::{RunEntry, RunReport, RunStatus};
use crate::domain::employee::{EmployeeRecord, ProcessedEmployee, SkipReason};
use crate::domain::ports::{MailerBox, PayslipRendererBox};
use tracing::{error, info, warn};

/// Drives one payroll batch.
///
/// Records are handled strictly one after another, in input order: a
/// record is validated, rendered and dispatched before the next one is
/// looked at. Nothing is retried and nothing is remembered between runs.
pub struct PayrollRun {
    renderer: PayslipRendererBox,
    dispatcher: PayslipDispatcher,
}

impl PayrollRun {
    /// Creates a new `PayrollRun`.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Where payslip documents are written.
    /// * `mailer` - How payslip emails are delivered.
    pub fn new(renderer: PayslipRendererBox, mailer: MailerBox) -> Self {
        Self {
            renderer,
            dispatcher: PayslipDispatcher::new(mailer),
        }
    }

    /// Processes a single record and reports what happened to it.
    ///
    /// Invalid records produce exactly one warning and are neither rendered
    /// nor mailed. Render and delivery failures are logged and reported but
    /// never returned as errors.
    pub async fn process_record(&self, record: &EmployeeRecord) -> RunEntry {
        let employee = match ProcessedEmployee::from_record(record) {
            Ok(employee) => employee,
            Err(reason) => {
                match reason {
                    SkipReason::MissingCompensation => warn!(
                        "Missing or invalid data for Employee ID {}",
                        record.display_id()
                    ),
                    SkipReason::MissingName => {
                        warn!("Missing employee name for Employee ID {}", record.display_id())
                    }
                }
                return RunEntry::skipped(record, reason.to_string());
            }
        };

        let path = match self.renderer.render(&employee) {
            Ok(path) => path,
            Err(e) => {
                error!("Error generating payslip for {}: {}", employee.name(), e);
                return RunEntry::processed(&employee, RunStatus::RenderFailed, Some(e.to_string()));
            }
        };

        match self.dispatcher.dispatch(&employee, &path).await {
            DispatchOutcome::Sent => RunEntry::processed(&employee, RunStatus::Sent, None),
            DispatchOutcome::Failed(detail) => {
                RunEntry::processed(&employee, RunStatus::SendFailed, Some(detail))
            }
        }
    }

    /// Processes every record in order and returns the per-record report.
    pub async fn process(&self, records: &[EmployeeRecord]) -> RunReport {
        let mut report = RunReport::default();
        for record in records {
            report.entries.push(self.process_record(record).await);
        }

        info!(
            total = report.entries.len(),
            sent = report.count(RunStatus::Sent),
            skipped = report.count(RunStatus::Skipped),
            render_failed = report.count(RunStatus::RenderFailed),
            send_failed = report.count(RunStatus::SendFailed),
            "payroll run finished"
        );
        report
    }
}
