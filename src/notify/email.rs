use lettre::message::{Mailbox, Message, MultiPart};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};

use super::{DeliveryError, DeliveryOutcome, Notifier, Report, SkipReason};
use crate::config::{DeliveryCredentials, SmtpSettings, SniperConfig};

/// Implicit-TLS SMTP delivery to a single recipient.
pub struct EmailNotifier {
    creds: Option<DeliveryCredentials>,
    smtp: SmtpSettings,
    notify_when_empty: bool,
}

impl EmailNotifier {
    pub fn from_config(cfg: &SniperConfig) -> Self {
        Self {
            creds: cfg.delivery.clone(),
            smtp: cfg.smtp.clone(),
            notify_when_empty: cfg.notify_when_empty,
        }
    }

    pub fn new(creds: Option<DeliveryCredentials>, smtp: SmtpSettings) -> Self {
        Self {
            creds,
            smtp,
            notify_when_empty: true,
        }
    }

    pub fn with_notify_when_empty(mut self, on: bool) -> Self {
        self.notify_when_empty = on;
        self
    }

    async fn send(&self, creds: &DeliveryCredentials, report: &Report) -> Result<(), DeliveryError> {
        let msg = compose(creds, report)?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.smtp.host)
            .map_err(|e| DeliveryError::Connection(e.to_string()))?
            .port(self.smtp.port)
            .credentials(Credentials::new(
                creds.sender.clone(),
                creds.password.clone(),
            ))
            .build();

        mailer.send(msg).await.map_err(|e| {
            if e.is_permanent() || e.is_transient() {
                DeliveryError::Rejected(e.to_string())
            } else {
                DeliveryError::Connection(e.to_string())
            }
        })?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Notifier for EmailNotifier {
    async fn deliver(&self, report: &Report) -> DeliveryOutcome {
        let Some(creds) = &self.creds else {
            tracing::info!("email credentials not found, skipping email");
            return DeliveryOutcome::Skipped(SkipReason::NoCredentials);
        };
        if report.is_empty() && !self.notify_when_empty {
            tracing::info!("nothing new, empty-report email turned off");
            return DeliveryOutcome::Skipped(SkipReason::EmptyReport);
        }

        tracing::info!(entries = report.len(), host = %self.smtp.host, "sending email notification");
        match self.send(creds, report).await {
            Ok(()) => {
                tracing::info!(recipient = %creds.receiver, "email sent");
                DeliveryOutcome::Sent {
                    recipient: creds.receiver.clone(),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to send email");
                DeliveryOutcome::Failed(e)
            }
        }
    }
}

fn mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|e: lettre::address::AddressError| DeliveryError::Address {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

fn compose(creds: &DeliveryCredentials, report: &Report) -> Result<Message, DeliveryError> {
    Message::builder()
        .from(mailbox(&creds.sender)?)
        .to(mailbox(&creds.receiver)?)
        .subject(report.subject())
        .multipart(MultiPart::alternative_plain_html(
            report.plain_body(),
            report.html_body(),
        ))
        .map_err(|e| DeliveryError::Message(e.to_string()))
}
