use crate::modules::contact::application::ports::outgoing::email_sender::{
    ContactSendError, EmailSender,
};
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), ContactSendError>;

    /// One-shot connectivity probe used at startup.
    async fn verify(&self) -> Result<(), ContactSendError>;
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), ContactSendError> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(classify_smtp_error)
    }

    async fn verify(&self) -> Result<(), ContactSendError> {
        match self.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ContactSendError::Other(
                "smtp connection test failed".to_string(),
            )),
            Err(e) => Err(classify_smtp_error(e)),
        }
    }
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Self {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .unwrap()
            .credentials(creds)
            .build();

        let mailer: Box<dyn Mailer> = Box::new(transport);

        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        }
    }

    pub async fn verify(&self) -> Result<(), ContactSendError> {
        self.mailer.verify().await
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ContactSendError> {
        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| ContactSendError::Other(format!("{:?}", e)))?,
            )
            .reply_to(
                reply_to
                    .parse()
                    .map_err(|e| ContactSendError::Other(format!("{:?}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| ContactSendError::Other(format!("{:?}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| ContactSendError::Other(e.to_string()))?;

        self.mailer.send(email).await
    }
}

fn classify_smtp_error(e: lettre::transport::smtp::Error) -> ContactSendError {
    let mut detail = e.to_string();
    let mut source = std::error::Error::source(&e);
    while let Some(s) = source {
        detail.push_str(": ");
        detail.push_str(&s.to_string());
        source = std::error::Error::source(s);
    }

    classify_transport_detail(&detail)
}

/// Maps a flattened transport error message onto the three failure classes
/// the contact endpoint distinguishes.
fn classify_transport_detail(detail: &str) -> ContactSendError {
    let msg = detail.to_lowercase();

    if msg.contains("535") || msg.contains("authentication") || msg.contains("credentials") {
        ContactSendError::Auth
    } else if msg.contains("lookup")
        || msg.contains("dns")
        || msg.contains("resolve")
        || msg.contains("connection")
        || msg.contains("network")
        || msg.contains("timed out")
    {
        ContactSendError::Unreachable
    } else {
        ContactSendError::Other(detail.to_string())
    }
}
