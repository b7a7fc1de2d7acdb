use crate::error::{PayslipError, Result};
use std::fmt;

pub const SENDER_EMAIL_VAR: &str = "SENDER_EMAIL";
pub const SENDER_PASSWORD_VAR: &str = "SENDER_PASSWORD";
pub const SMTP_SERVER_VAR: &str = "SMTP_SERVER";
pub const SMTP_PORT_VAR: &str = "SMTP_PORT";

pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Mail relay settings, read once at startup.
///
/// | Variable | Required | Default |
/// |----------|----------|---------|
/// | `SENDER_EMAIL` | Yes | |
/// | `SENDER_PASSWORD` | Yes | |
/// | `SMTP_SERVER` | No | `smtp.gmail.com` |
/// | `SMTP_PORT` | No | `465` |
#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub sender_email: String,
    pub sender_password: String,
    pub smtp_server: String,
    pub smtp_port: u16,
}

impl RelayConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Missing or blank sender credentials are an error here rather than at
    /// the first dispatch, so a misconfigured run never processes a record.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let sender_email = non_empty(SENDER_EMAIL_VAR)
            .ok_or_else(|| PayslipError::Config(format!("{SENDER_EMAIL_VAR} is not set")))?;
        let sender_password = non_empty(SENDER_PASSWORD_VAR)
            .ok_or_else(|| PayslipError::Config(format!("{SENDER_PASSWORD_VAR} is not set")))?;
        let smtp_server =
            non_empty(SMTP_SERVER_VAR).unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string());
        let smtp_port = match non_empty(SMTP_PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                PayslipError::Config(format!("{SMTP_PORT_VAR} must be a port number, got {raw:?}: {e}"))
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            sender_email: sender_email.trim().to_string(),
            sender_password,
            smtp_server: smtp_server.trim().to_string(),
            smtp_port,
        })
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("sender_email", &self.sender_email)
            .field("sender_password", &"<redacted>")
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .finish()
    }
}
