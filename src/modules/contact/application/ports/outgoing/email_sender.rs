use async_trait::async_trait;

/// Delivery failure classes surfaced to the contact endpoint. All map to the
/// same status code but carry distinct operator-facing messages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactSendError {
    #[error("smtp authentication rejected")]
    Auth,

    #[error("mail relay unreachable")]
    Unreachable,

    #[error("mail delivery failed: {0}")]
    Other(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// One delivery attempt, no retry. `reply_to` carries the submitter's
    /// address so the operator can answer directly.
    async fn send_email(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ContactSendError>;
}
