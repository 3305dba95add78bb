use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::certification::application::ports::outgoing::certification_repository::CertificationRepositoryError;
use crate::shared::api::{AdminAccess, ApiReply};
use crate::AppState;

#[delete("/api/certifications/{certification_id}")]
pub async fn delete_certification_handler(
    _access: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(certification_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiReply::bad_request("Invalid certification ID format");
    };

    match data.certifications.delete(certification_id).await {
        Ok(deleted) => ApiReply::deleted("Certification deleted successfully", deleted),

        Err(CertificationRepositoryError::NotFound) => {
            ApiReply::not_found("Certification not found")
        }

        Err(e) => {
            error!("Error deleting certification {}: {}", certification_id, e);
            ApiReply::internal_error("Error deleting certification")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use uuid::Uuid;

    use crate::tests::support::stubs::MockCertificationRepo;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, certification_record};

    #[actix_web::test]
    async fn test_delete_certification_returns_message_and_snapshot() {
        let record = certification_record("AWS SA");
        let id = record.id;

        let app_state = TestAppStateBuilder::default()
            .with_certifications(MockCertificationRepo::delete(Ok(record)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_certification_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/certifications/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Certification deleted successfully");
        assert_eq!(body["deleted"]["name"], "AWS SA");
    }

    #[actix_web::test]
    async fn test_delete_certification_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_certifications(MockCertificationRepo::delete(Err(
                CertificationRepositoryError::NotFound,
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_certification_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/certifications/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_certification_malformed_id_skips_repository() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_certification_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/certifications/zzz")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
