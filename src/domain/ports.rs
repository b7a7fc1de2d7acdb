use super::email::PayslipEmail;
use super::employee::ProcessedEmployee;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Turns a processed employee into a persisted payslip document.
pub trait PayslipRenderer: Send + Sync {
    /// Writes the document and returns the path it was written to.
    fn render(&self, employee: &ProcessedEmployee) -> Result<PathBuf>;
}

/// Submits a composed payslip message to a mail relay.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &PayslipEmail) -> Result<()>;
}

pub type PayslipRendererBox = Box<dyn PayslipRenderer>;
pub type MailerBox = Box<dyn Mailer>;
