use crate::domain::email::PayslipEmail;
use crate::domain::employee::ProcessedEmployee;
use crate::domain::ports::MailerBox;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Failed(String),
}

/// Composes payslip emails and hands them to the mailer.
///
/// Delivery errors never escape: they are logged with the recipient and
/// returned as [`DispatchOutcome::Failed`] so the batch can move on.
pub struct PayslipDispatcher {
    mailer: MailerBox,
}

impl PayslipDispatcher {
    pub fn new(mailer: MailerBox) -> Self {
        Self { mailer }
    }

    pub async fn dispatch(&self, employee: &ProcessedEmployee, attachment: &Path) -> DispatchOutcome {
        let Some(email) = PayslipEmail::compose(employee, attachment) else {
            let detail = "no email address on record".to_string();
            error!("Error sending email to N/A ({}): {}", employee.name(), detail);
            return DispatchOutcome::Failed(detail);
        };

        match self.mailer.send(&email).await {
            Ok(()) => {
                info!("Payslip for {} sent successfully.", employee.name());
                DispatchOutcome::Sent
            }
            Err(e) => {
                error!("Error sending email to {}: {}", email.to, e);
                DispatchOutcome::Failed(e.to_string())
            }
        }
    }
}
