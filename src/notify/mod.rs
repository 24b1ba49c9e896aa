pub mod email;
pub mod report;

pub use email::EmailNotifier;
pub use report::Report;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid address {address:?}: {reason}")]
    Address { address: String, reason: String },

    #[error("could not build message: {0}")]
    Message(String),

    #[error("SMTP connection failed: {0}")]
    Connection(String),

    #[error("SMTP server rejected the message: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Sender or password not configured.
    NoCredentials,
    /// Nothing new and empty-report mails are turned off.
    EmptyReport,
    Disabled,
}

#[derive(Debug)]
pub enum DeliveryOutcome {
    Sent { recipient: String },
    Skipped(SkipReason),
    Failed(DeliveryError),
}

impl DeliveryOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, DeliveryOutcome::Failed(_))
    }

    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryOutcome::Sent { .. } => "sent",
            DeliveryOutcome::Skipped(_) => "skipped",
            DeliveryOutcome::Failed(_) => "failed",
        }
    }
}

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Never errors out: every problem is folded into the outcome.
    async fn deliver(&self, report: &Report) -> DeliveryOutcome;
}

/// Accepts every report and sends nothing.
pub struct NoopNotifier;

#[async_trait::async_trait]
impl Notifier for NoopNotifier {
    async fn deliver(&self, report: &Report) -> DeliveryOutcome {
        tracing::debug!(entries = report.len(), "notifications disabled");
        DeliveryOutcome::Skipped(SkipReason::Disabled)
    }
}
