use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
use crate::shared::api::validate::is_valid_http_url;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_record).collect())
    }

    async fn create(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let github_url = data.github_url.as_deref().unwrap_or_default().trim().to_string();
        let project_url = data
            .project_url
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();

        check_url(&github_url, "GitHub URL must be a valid URL")?;
        check_url(&project_url, "Project URL must be a valid URL")?;

        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(data.category.trim().to_string()),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description.trim().to_string()),
            technologies: Set(trim_all(&data.technologies)),
            github_url: Set(github_url),
            project_url: Set(project_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let stored = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(stored))
    }

    async fn update(
        &self,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(category) = data.category.into_required_text() {
            model.category = Set(category);
        }

        if let Some(title) = data.title.into_required_text() {
            model.title = Set(title);
        }

        if let Some(description) = data.description.into_required_text() {
            model.description = Set(description);
        }

        if let Some(technologies) = data.technologies.into_trimmed_list() {
            model.technologies = Set(technologies);
        }

        if let Some(url) = data.github_url.into_optional_text() {
            check_url(&url, "GitHub URL must be a valid URL")?;
            model.github_url = Set(url);
        }

        if let Some(url) = data.project_url.into_optional_text() {
            check_url(&url, "Project URL must be a valid URL")?;
            model.project_url = Set(url);
        }

        let has_changes = model.category.is_set()
            || model.title.is_set()
            || model.description.is_set()
            || model.technologies.is_set()
            || model.github_url.is_set()
            || model.project_url.is_set();

        if !has_changes {
            let row = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return Ok(model_to_record(row));
        }

        // update_many bypasses ActiveModelBehavior, so the timestamp is
        // refreshed here.
        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        Ok(model_to_record(row))
    }

    async fn delete(&self, project_id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError> {
        let row = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let snapshot = model_to_record(row.clone());

        row.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(snapshot)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: projects::Model) -> ProjectRecord {
    ProjectRecord {
        id: model.id,
        category: model.category,
        title: model.title,
        description: model.description,
        technologies: model.technologies,
        github_url: model.github_url,
        project_url: model.project_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn trim_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.trim().to_string()).collect()
}

fn check_url(value: &str, message: &str) -> Result<(), ProjectRepositoryError> {
    if is_valid_http_url(value) {
        Ok(())
    } else {
        Err(ProjectRepositoryError::Validation(message.to_string()))
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
