use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::contact::application::ports::outgoing::email_sender::ContactSendError;
use crate::modules::contact::application::services::ContactMessage;
use crate::shared::api::validate::non_blank;
use crate::shared::api::ApiReply;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[post("/api/contact")]
pub async fn send_contact_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let (Some(name), Some(email), Some(subject), Some(message)) = (
        non_blank(req.name),
        non_blank(req.email),
        non_blank(req.subject),
        non_blank(req.message),
    ) else {
        return ApiReply::bad_request("All fields are required");
    };

    let submission = ContactMessage {
        name,
        email,
        subject,
        message,
    };

    match data.contact.send_submission(submission).await {
        Ok(()) => ApiReply::message("Message sent successfully"),

        Err(ContactSendError::Auth) => {
            error!("Contact email rejected: smtp authentication failed");
            ApiReply::internal_error(
                "Email authentication failed. Please check your email configuration.",
            )
        }

        Err(ContactSendError::Unreachable) => {
            error!("Contact email rejected: mail relay unreachable");
            ApiReply::internal_error(
                "Email server not found. Please check your internet connection.",
            )
        }

        Err(ContactSendError::Other(e)) => {
            error!("Error sending contact email: {}", e);
            ApiReply::internal_error("Error sending message. Please try again later.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::contact::adapter::outgoing::mock_sender::MockEmailSender;
    use crate::modules::contact::application::services::ContactMailer;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    fn base_body() -> Value {
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hiring",
            "message": "Hello there"
        })
    }

    #[actix_web::test]
    async fn test_contact_sends_exactly_one_email() {
        let sender = Arc::new(MockEmailSender::new());
        let mailer = ContactMailer::new(sender.clone(), "operator@example.com".to_string());

        let app_state = TestAppStateBuilder::default()
            .with_contact_mailer(mailer)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(send_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(&base_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Message sent successfully");

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "operator@example.com");
        assert_eq!(sent[0].subject, "Portfolio Contact: Hiring");
    }

    #[actix_web::test]
    async fn test_contact_missing_any_field_sends_nothing() {
        for field in ["name", "email", "subject", "message"] {
            let mut body = base_body();
            body.as_object_mut().unwrap().remove(field);

            let sender = Arc::new(MockEmailSender::new());
            let mailer = ContactMailer::new(sender.clone(), "operator@example.com".to_string());

            let app_state = TestAppStateBuilder::default()
                .with_contact_mailer(mailer)
                .build();

            let app = test::init_service(
                App::new()
                    .app_data(app_state)
                    .service(send_contact_handler),
            )
            .await;

            let req = test::TestRequest::post()
                .uri("/api/contact")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "field: {field}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "All fields are required");
            assert!(sender.sent_emails().is_empty(), "field: {field}");
        }
    }

    #[actix_web::test]
    async fn test_contact_failure_messages_are_distinguished() {
        let cases = [
            (
                ContactSendError::Auth,
                "Email authentication failed. Please check your email configuration.",
            ),
            (
                ContactSendError::Unreachable,
                "Email server not found. Please check your internet connection.",
            ),
            (
                ContactSendError::Other("421".to_string()),
                "Error sending message. Please try again later.",
            ),
        ];

        for (failure, expected) in cases {
            let sender = Arc::new(MockEmailSender::failing_with(failure));
            let mailer = ContactMailer::new(sender, "operator@example.com".to_string());

            let app_state = TestAppStateBuilder::default()
                .with_contact_mailer(mailer)
                .build();

            let app = test::init_service(
                App::new()
                    .app_data(app_state)
                    .service(send_contact_handler),
            )
            .await;

            let req = test::TestRequest::post()
                .uri("/api/contact")
                .set_json(&base_body())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], expected);
        }
    }
}
