use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiReply;
use crate::AppState;

#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experiences.list().await {
        Ok(experiences) => ApiReply::ok(experiences),

        Err(e) => {
            error!("Error fetching experiences: {}", e);
            ApiReply::internal_error("Error fetching experiences")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::stubs::MockExperienceRepo;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, experience_record};

    #[actix_web::test]
    async fn test_get_experiences_returns_plain_array() {
        let app_state = TestAppStateBuilder::default()
            .with_experiences(MockExperienceRepo::list(Ok(vec![
                experience_record("Staff Engineer"),
                experience_record("Backend Engineer"),
            ])))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_experiences_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/experiences").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let items = body.as_array().expect("array body");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "Staff Engineer");
        assert!(items[0]["startDate"].is_string());
        assert_eq!(items[0]["endDate"], "");
    }

    #[actix_web::test]
    async fn test_get_experiences_storage_error_internal_error() {
        use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepositoryError;

        let app_state = TestAppStateBuilder::default()
            .with_experiences(MockExperienceRepo::list(Err(
                ExperienceRepositoryError::DatabaseError("db down".to_string()),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_experiences_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/experiences").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
