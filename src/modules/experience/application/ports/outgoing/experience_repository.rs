// src/modules/experience/application/ports/outgoing/experience_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::api::PatchField;

#[derive(Debug, Clone)]
pub struct CreateExperienceData {
    pub title: String,
    pub company: String,
    pub location: String,

    /// Free-form, not a parsed date ("Jan 2023", "2023-01", ...).
    pub start_date: String,

    /// Empty means "current position".
    pub end_date: Option<String>,

    pub description: String,
    pub technologies: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
}

/// Update policy: plain strings only replace on a non-blank value; end_date
/// is written whenever provided (empty string flips the row back to
/// "current"); arrays replace wholesale.
#[derive(Debug, Clone, Default)]
pub struct UpdateExperienceData {
    pub title: PatchField<String>,
    pub company: PatchField<String>,
    pub location: PatchField<String>,
    pub start_date: PatchField<String>,
    pub end_date: PatchField<String>,
    pub description: PatchField<String>,
    pub technologies: PatchField<Vec<String>>,
    pub achievements: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All experiences, newest first.
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError>;

    async fn create(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn update(
        &self,
        experience_id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn delete(
        &self,
        experience_id: Uuid,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;
}
