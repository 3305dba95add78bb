use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepositoryError, UpdateExperienceData,
};
use crate::shared::api::{AdminAccess, ApiReply, PatchField};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub company: PatchField<String>,

    #[serde(default)]
    pub location: PatchField<String>,

    #[serde(default)]
    pub start_date: PatchField<String>,

    #[serde(default)]
    pub end_date: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub technologies: PatchField<Vec<String>>,

    #[serde(default)]
    pub achievements: PatchField<Vec<String>>,
}

impl From<UpdateExperienceRequest> for UpdateExperienceData {
    fn from(req: UpdateExperienceRequest) -> Self {
        UpdateExperienceData {
            title: req.title,
            company: req.company,
            location: req.location,
            start_date: req.start_date,
            end_date: req.end_date,
            description: req.description,
            technologies: req.technologies,
            achievements: req.achievements,
        }
    }
}

#[put("/api/experiences/{experience_id}")]
pub async fn update_experience_handler(
    _access: AdminAccess,
    path: web::Path<String>,
    req: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(experience_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiReply::bad_request("Invalid experience ID format");
    };

    match data
        .experiences
        .update(experience_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiReply::ok(updated),

        Err(ExperienceRepositoryError::NotFound) => ApiReply::not_found("Experience not found"),

        Err(ExperienceRepositoryError::DatabaseError(e)) => {
            error!("Error updating experience {}: {}", experience_id, e);
            ApiReply::internal_error("Error updating experience")
        }
    }
}
