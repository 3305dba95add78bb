use crate::modules::contact::application::ports::outgoing::email_sender::{
    ContactSendError, EmailSender,
};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Composes a contact-form submission into one operator-bound email.
#[derive(Clone)]
pub struct ContactMailer {
    sender: Arc<dyn EmailSender + Send + Sync>,
    inbox: String,
}

impl fmt::Debug for ContactMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactMailer")
            .field("sender", &"<dyn EmailSender>")
            .field("inbox", &self.inbox)
            .finish()
    }
}

impl ContactMailer {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, inbox: String) -> Self {
        Self { sender, inbox }
    }

    pub async fn send_submission(&self, msg: ContactMessage) -> Result<(), ContactSendError> {
        let subject = format!("Portfolio Contact: {}", msg.subject);
        let body = format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>",
            msg.name,
            msg.email,
            msg.subject,
            msg.message.replace('\n', "<br>")
        );

        self.sender
            .send_email(&self.inbox, &msg.email, &subject, &body)
            .await
    }
}
