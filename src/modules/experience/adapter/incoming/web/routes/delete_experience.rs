use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepositoryError;
use crate::shared::api::{AdminAccess, ApiReply};
use crate::AppState;

#[delete("/api/experiences/{experience_id}")]
pub async fn delete_experience_handler(
    _access: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(experience_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiReply::bad_request("Invalid experience ID format");
    };

    match data.experiences.delete(experience_id).await {
        Ok(deleted) => ApiReply::deleted("Experience deleted successfully", deleted),

        Err(ExperienceRepositoryError::NotFound) => ApiReply::not_found("Experience not found"),

        Err(e) => {
            error!("Error deleting experience {}: {}", experience_id, e);
            ApiReply::internal_error("Error deleting experience")
        }
    }
}
