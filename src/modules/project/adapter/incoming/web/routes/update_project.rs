use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepositoryError, UpdateProjectData,
};
use crate::shared::api::{AdminAccess, ApiReply, PatchField};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub category: PatchField<String>,

    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub technologies: PatchField<Vec<String>>,

    #[serde(default)]
    pub github_url: PatchField<String>,

    #[serde(default)]
    pub project_url: PatchField<String>,
}

impl From<UpdateProjectRequest> for UpdateProjectData {
    fn from(req: UpdateProjectRequest) -> Self {
        UpdateProjectData {
            category: req.category,
            title: req.title,
            description: req.description,
            technologies: req.technologies,
            github_url: req.github_url,
            project_url: req.project_url,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/projects/{project_id}")]
pub async fn update_project_handler(
    _access: AdminAccess,
    path: web::Path<String>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Parsed by hand so a malformed id 400s before any storage call.
    let Ok(project_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiReply::bad_request("Invalid project ID format");
    };

    match data.projects.update(project_id, req.into_inner().into()).await {
        Ok(updated) => ApiReply::ok(updated),

        Err(ProjectRepositoryError::NotFound) => ApiReply::not_found("Project not found"),

        Err(ProjectRepositoryError::Validation(detail)) => ApiReply::validation(&detail),

        Err(ProjectRepositoryError::DatabaseError(e)) => {
            error!("Error updating project {}: {}", project_id, e);
            ApiReply::internal_error("Error updating project")
        }
    }
}
