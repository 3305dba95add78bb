use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiReply;
use crate::AppState;

#[get("/api/certifications")]
pub async fn get_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certifications.list().await {
        Ok(certifications) => ApiReply::ok(certifications),

        Err(e) => {
            error!("Error fetching certifications: {}", e);
            ApiReply::internal_error("Error fetching certifications")
        }
    }
}
