// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::api::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub category: String,
    pub title: String,
    pub description: String,

    /// Replaces the stored list wholesale; elements are trimmed on write.
    pub technologies: Vec<String>,

    /// Empty or missing means "no link"; stored as empty string.
    pub github_url: Option<String>,
    pub project_url: Option<String>,
}

/// Update policy:
/// - category/title/description: only a non-blank value replaces the stored one
/// - technologies: a provided array replaces the whole list
/// - github_url/project_url: any provided value (including "" and null) is
///   written, which is how a link gets cleared
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub category: PatchField<String>,
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub technologies: PatchField<Vec<String>>,
    pub github_url: PatchField<String>,
    pub project_url: PatchField<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub category: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub project_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// Schema constraint violated (malformed URL field).
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, oldest first.
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;

    async fn create(&self, data: CreateProjectData)
        -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn update(
        &self,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    /// Removes the row and returns its last state.
    async fn delete(&self, project_id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError>;
}
