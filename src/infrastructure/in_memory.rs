use crate::domain::email::PayslipEmail;
use crate::domain::employee::ProcessedEmployee;
use crate::domain::payslip::{PayslipDocument, payslip_path};
use crate::domain::ports::{Mailer, PayslipRenderer};
use crate::error::{PayslipError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Keeps rendered payslips in memory, keyed by the path a file renderer
/// would have written.
///
/// Clones share state, so a test can hand one clone to a run and inspect
/// the other afterwards.
#[derive(Default, Clone)]
pub struct InMemoryPayslipRenderer {
    output_dir: PathBuf,
    documents: Arc<RwLock<BTreeMap<PathBuf, PayslipDocument>>>,
    failing: Arc<HashSet<String>>,
}

impl InMemoryPayslipRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Makes rendering fail for the given employee names.
    pub fn failing_for<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failing = Arc::new(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn documents(&self) -> BTreeMap<PathBuf, PayslipDocument> {
        self.documents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl PayslipRenderer for InMemoryPayslipRenderer {
    fn render(&self, employee: &ProcessedEmployee) -> Result<PathBuf> {
        if self.failing.contains(employee.name()) {
            return Err(PayslipError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "output directory is not writable",
            )));
        }

        let path = payslip_path(&self.output_dir, employee.name());
        self.documents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(path.clone(), PayslipDocument::for_employee(employee));
        Ok(path)
    }
}

/// Records every message it is asked to send instead of contacting a relay.
#[derive(Default, Clone)]
pub struct RecordingMailer {
    sent: Arc<tokio::sync::RwLock<Vec<PayslipEmail>>>,
    rejected: Arc<HashSet<String>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes delivery fail for the given recipient addresses.
    pub fn rejecting<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejected = Arc::new(recipients.into_iter().map(Into::into).collect());
        self
    }

    pub async fn sent(&self) -> Vec<PayslipEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &PayslipEmail) -> Result<()> {
        if self.rejected.contains(&email.to) {
            return Err(PayslipError::Mail(format!(
                "535 authentication rejected for {}",
                email.to
            )));
        }
        self.sent.write().await.push(email.clone());
        Ok(())
    }
}
