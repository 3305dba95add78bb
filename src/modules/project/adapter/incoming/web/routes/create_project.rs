use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepositoryError,
};
use crate::shared::api::validate::non_blank;
use crate::shared::api::{AdminAccess, ApiReply};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub project_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/projects")]
pub async fn create_project_handler(
    _access: AdminAccess,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let (Some(category), Some(title), Some(description), Some(technologies)) = (
        non_blank(req.category),
        non_blank(req.title),
        non_blank(req.description),
        req.technologies,
    ) else {
        return ApiReply::bad_request(
            "Missing required fields: category, title, description, and technologies (array)",
        );
    };

    let project_data = CreateProjectData {
        category,
        title,
        description,
        technologies,
        github_url: req.github_url,
        project_url: req.project_url,
    };

    match data.projects.create(project_data).await {
        Ok(created) => ApiReply::created(created),

        Err(ProjectRepositoryError::Validation(detail)) => ApiReply::validation(&detail),

        Err(e) => {
            error!("Error creating project: {}", e);
            ApiReply::internal_error("Error creating project")
        }
    }
}
