// src/modules/certification/application/ports/outgoing/certification_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::api::PatchField;

#[derive(Debug, Clone)]
pub struct CreateCertificationData {
    pub name: String,
    pub organization: String,

    /// Empty or missing means "no link"; stored as empty string.
    pub verification_url: Option<String>,

    pub description: String,
    pub skills: Option<Vec<String>>,
}

/// Update policy: name/organization/description only replace on a non-blank
/// value; verification_url is written whenever provided ("" clears it);
/// skills replaces wholesale.
#[derive(Debug, Clone, Default)]
pub struct UpdateCertificationData {
    pub name: PatchField<String>,
    pub organization: PatchField<String>,
    pub verification_url: PatchField<String>,
    pub description: PatchField<String>,
    pub skills: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub id: Uuid,
    pub name: String,
    pub organization: String,
    pub verification_url: String,
    pub description: String,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationRepositoryError {
    #[error("Certification not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    /// All certifications, newest first.
    async fn list(&self) -> Result<Vec<CertificationRecord>, CertificationRepositoryError>;

    async fn create(
        &self,
        data: CreateCertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError>;

    async fn update(
        &self,
        certification_id: Uuid,
        data: UpdateCertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError>;

    async fn delete(
        &self,
        certification_id: Uuid,
    ) -> Result<CertificationRecord, CertificationRepositoryError>;
}
