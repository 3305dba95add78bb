use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;
use crate::shared::api::{AdminAccess, ApiReply};
use crate::AppState;

#[delete("/api/projects/{project_id}")]
pub async fn delete_project_handler(
    _access: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(project_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiReply::bad_request("Invalid project ID format");
    };

    match data.projects.delete(project_id).await {
        Ok(deleted) => ApiReply::deleted("Project deleted successfully", deleted),

        Err(ProjectRepositoryError::NotFound) => ApiReply::not_found("Project not found"),

        Err(e) => {
            error!("Error deleting project {}: {}", project_id, e);
            ApiReply::internal_error("Error deleting project")
        }
    }
}
