use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
    UpdateExperienceData,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_record).collect())
    }

    async fn create(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            company: Set(data.company.trim().to_string()),
            location: Set(data.location.trim().to_string()),
            start_date: Set(data.start_date.trim().to_string()),
            end_date: Set(data.end_date.as_deref().unwrap_or_default().trim().to_string()),
            description: Set(data.description.trim().to_string()),
            technologies: Set(trim_all(data.technologies.as_deref().unwrap_or_default())),
            achievements: Set(trim_all(data.achievements.as_deref().unwrap_or_default())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let stored = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(stored))
    }

    async fn update(
        &self,
        experience_id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title.into_required_text() {
            model.title = Set(title);
        }

        if let Some(company) = data.company.into_required_text() {
            model.company = Set(company);
        }

        if let Some(location) = data.location.into_required_text() {
            model.location = Set(location);
        }

        if let Some(start_date) = data.start_date.into_required_text() {
            model.start_date = Set(start_date);
        }

        // Writing "" here is meaningful: it marks the position as current.
        if let Some(end_date) = data.end_date.into_optional_text() {
            model.end_date = Set(end_date);
        }

        if let Some(description) = data.description.into_required_text() {
            model.description = Set(description);
        }

        if let Some(technologies) = data.technologies.into_trimmed_list() {
            model.technologies = Set(technologies);
        }

        if let Some(achievements) = data.achievements.into_trimmed_list() {
            model.achievements = Set(achievements);
        }

        let has_changes = model.title.is_set()
            || model.company.is_set()
            || model.location.is_set()
            || model.start_date.is_set()
            || model.end_date.is_set()
            || model.description.is_set()
            || model.technologies.is_set()
            || model.achievements.is_set();

        if !has_changes {
            let row = Entity::find_by_id(experience_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ExperienceRepositoryError::NotFound)?;

            return Ok(model_to_record(row));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(experience_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        Ok(model_to_record(row))
    }

    async fn delete(
        &self,
        experience_id: Uuid,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let row = Entity::find_by_id(experience_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        let snapshot = model_to_record(row.clone());

        row.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(snapshot)
    }
}

fn model_to_record(model: experiences::Model) -> ExperienceRecord {
    ExperienceRecord {
        id: model.id,
        title: model.title,
        company: model.company,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        technologies: model.technologies,
        achievements: model.achievements,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn trim_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.trim().to_string()).collect()
}

fn map_db_err(e: sea_orm::DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
