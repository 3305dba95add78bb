use crate::modules::contact::application::ports::outgoing::email_sender::{
    ContactSendError, EmailSender,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

/// Records every accepted message so tests can assert on exactly what went
/// out. Optionally fails every send with a fixed error.
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<SentEmail>>>,
    failure: Option<ContactSendError>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub fn failing_with(failure: ContactSendError) -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            failure: Some(failure),
        }
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent_emails.lock().unwrap().clone()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ContactSendError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        self.sent_emails.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            reply_to: reply_to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
