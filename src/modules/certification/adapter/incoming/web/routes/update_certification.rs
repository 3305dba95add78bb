use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::modules::certification::application::ports::outgoing::certification_repository::{
    CertificationRepositoryError, UpdateCertificationData,
};
use crate::shared::api::{AdminAccess, ApiReply, PatchField};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificationRequest {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub organization: PatchField<String>,

    #[serde(default)]
    pub verification_url: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub skills: PatchField<Vec<String>>,
}

impl From<UpdateCertificationRequest> for UpdateCertificationData {
    fn from(req: UpdateCertificationRequest) -> Self {
        UpdateCertificationData {
            name: req.name,
            organization: req.organization,
            verification_url: req.verification_url,
            description: req.description,
            skills: req.skills,
        }
    }
}

#[put("/api/certifications/{certification_id}")]
pub async fn update_certification_handler(
    _access: AdminAccess,
    path: web::Path<String>,
    req: web::Json<UpdateCertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(certification_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiReply::bad_request("Invalid certification ID format");
    };

    match data
        .certifications
        .update(certification_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiReply::ok(updated),

        Err(CertificationRepositoryError::NotFound) => {
            ApiReply::not_found("Certification not found")
        }

        Err(CertificationRepositoryError::Validation(detail)) => ApiReply::validation(&detail),

        Err(CertificationRepositoryError::DatabaseError(e)) => {
            error!("Error updating certification {}: {}", certification_id, e);
            ApiReply::internal_error("Error updating certification")
        }
    }
}
