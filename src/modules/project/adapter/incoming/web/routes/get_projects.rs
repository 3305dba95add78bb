use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiReply;
use crate::AppState;

#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.projects.list().await {
        Ok(projects) => ApiReply::ok(projects),

        Err(e) => {
            error!("Error fetching projects: {}", e);
            ApiReply::internal_error("Error fetching projects")
        }
    }
}
