use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::experience::application::ports::outgoing::experience_repository::CreateExperienceData;
use crate::shared::api::validate::non_blank;
use crate::shared::api::{AdminAccess, ApiReply};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
}

#[post("/api/experiences")]
pub async fn create_experience_handler(
    _access: AdminAccess,
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let (Some(title), Some(company), Some(location), Some(start_date), Some(description)) = (
        non_blank(req.title),
        non_blank(req.company),
        non_blank(req.location),
        non_blank(req.start_date),
        non_blank(req.description),
    ) else {
        return ApiReply::bad_request(
            "Missing required fields: title, company, location, startDate, and description",
        );
    };

    let experience_data = CreateExperienceData {
        title,
        company,
        location,
        start_date,
        end_date: req.end_date,
        description,
        technologies: req.technologies,
        achievements: req.achievements,
    };

    match data.experiences.create(experience_data).await {
        Ok(created) => ApiReply::created(created),

        Err(e) => {
            error!("Error creating experience: {}", e);
            ApiReply::internal_error("Error creating experience")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::stubs::MockExperienceRepo;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, experience_record};

    fn base_body() -> Value {
        json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "startDate": "Jan 2023",
            "description": "Built services"
        })
    }

    #[actix_web::test]
    async fn test_create_experience_success() {
        let app_state = TestAppStateBuilder::default()
            .with_experiences(MockExperienceRepo::create(Ok(experience_record(
                "Backend Engineer",
            ))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experiences")
            .set_json(&base_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Backend Engineer");
        assert_eq!(body["company"], "Acme");
    }

    #[actix_web::test]
    async fn test_create_experience_missing_each_required_field() {
        for field in ["title", "company", "location", "startDate", "description"] {
            let mut body = base_body();
            body.as_object_mut().unwrap().remove(field);

            let app_state = TestAppStateBuilder::default().build();
            let app = test::init_service(
                App::new()
                    .app_data(app_state)
                    .service(create_experience_handler),
            )
            .await;

            let req = test::TestRequest::post()
                .uri("/api/experiences")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "field: {field}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(
                body["message"],
                "Missing required fields: title, company, location, startDate, and description"
            );
        }
    }

    #[actix_web::test]
    async fn test_create_experience_end_date_optional() {
        let mut expected = experience_record("Backend Engineer");
        expected.end_date = String::new();

        let app_state = TestAppStateBuilder::default()
            .with_experiences(MockExperienceRepo::create(Ok(expected)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experiences")
            .set_json(&base_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["endDate"], "");
    }
}
