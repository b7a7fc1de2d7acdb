use crate::config::RelayConfig;
use crate::domain::email::PayslipEmail;
use crate::domain::ports::Mailer;
use crate::error::{PayslipError, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

/// Port on which the relay expects TLS from the first byte.
pub const IMPLICIT_TLS_PORT: u16 = 465;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Delivers payslips through an authenticated SMTP relay.
///
/// The transport is pooled, so the authenticated session opened for the
/// first message is reused for the rest of the run.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Builds the transport. No connection is made until the first send.
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let sender: Mailbox = config.sender_email.parse().map_err(|e| {
            PayslipError::Config(format!("invalid sender address {:?}: {e}", config.sender_email))
        })?;

        let builder = if config.smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_server)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)
        }
        .map_err(|e| PayslipError::Config(format!("invalid relay {}: {e}", config.smtp_server)))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.sender_email.clone(),
                config.sender_password.clone(),
            ))
            .build();

        Ok(Self { transport, sender })
    }

    fn build_message(&self, email: &PayslipEmail, attachment: Vec<u8>) -> Result<Message> {
        let recipient: Mailbox = email
            .to
            .parse()
            .map_err(|e| PayslipError::Mail(format!("invalid recipient {:?}: {e}", email.to)))?;
        let file_name = email
            .attachment
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "payslip.pdf".to_string());
        let content_type =
            ContentType::parse(PDF_CONTENT_TYPE).map_err(|e| PayslipError::Mail(e.to_string()))?;

        Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(email.subject.as_str())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(email.body.clone()))
                    .singlepart(Attachment::new(file_name).body(attachment, content_type)),
            )
            .map_err(|e| PayslipError::Mail(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &PayslipEmail) -> Result<()> {
        let attachment = tokio::fs::read(&email.attachment).await?;
        let message = self.build_message(email, attachment)?;
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| PayslipError::Mail(e.to_string()))?;
        debug!(to = %email.to, code = %response.code(), "relay accepted message");
        Ok(())
    }
}
