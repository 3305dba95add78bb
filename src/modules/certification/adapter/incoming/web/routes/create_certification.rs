use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::certification::application::ports::outgoing::certification_repository::{
    CertificationRepositoryError, CreateCertificationData,
};
use crate::shared::api::validate::non_blank;
use crate::shared::api::{AdminAccess, ApiReply};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificationRequest {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub verification_url: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[post("/api/certifications")]
pub async fn create_certification_handler(
    _access: AdminAccess,
    req: web::Json<CreateCertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let (Some(name), Some(organization), Some(description)) = (
        non_blank(req.name),
        non_blank(req.organization),
        non_blank(req.description),
    ) else {
        return ApiReply::bad_request(
            "Missing required fields: name, organization, and description",
        );
    };

    let certification_data = CreateCertificationData {
        name,
        organization,
        verification_url: req.verification_url,
        description,
        skills: req.skills,
    };

    match data.certifications.create(certification_data).await {
        Ok(created) => ApiReply::created(created),

        Err(CertificationRepositoryError::Validation(detail)) => ApiReply::validation(&detail),

        Err(e) => {
            error!("Error creating certification: {}", e);
            ApiReply::internal_error("Error creating certification")
        }
    }
}
