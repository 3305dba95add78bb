use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certification::adapter::outgoing::sea_orm_entity::certifications::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::certification::application::ports::outgoing::certification_repository::{
    CertificationRecord, CertificationRepository, CertificationRepositoryError,
    CreateCertificationData, UpdateCertificationData,
};
use crate::shared::api::validate::is_valid_http_url;

#[derive(Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificationRepository for CertificationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<CertificationRecord>, CertificationRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_record).collect())
    }

    async fn create(
        &self,
        data: CreateCertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        let verification_url = data
            .verification_url
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();

        check_url(&verification_url)?;

        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            organization: Set(data.organization.trim().to_string()),
            verification_url: Set(verification_url),
            description: Set(data.description.trim().to_string()),
            skills: Set(trim_all(data.skills.as_deref().unwrap_or_default())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let stored = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(stored))
    }

    async fn update(
        &self,
        certification_id: Uuid,
        data: UpdateCertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = data.name.into_required_text() {
            model.name = Set(name);
        }

        if let Some(organization) = data.organization.into_required_text() {
            model.organization = Set(organization);
        }

        if let Some(url) = data.verification_url.into_optional_text() {
            check_url(&url)?;
            model.verification_url = Set(url);
        }

        if let Some(description) = data.description.into_required_text() {
            model.description = Set(description);
        }

        if let Some(skills) = data.skills.into_trimmed_list() {
            model.skills = Set(skills);
        }

        let has_changes = model.name.is_set()
            || model.organization.is_set()
            || model.verification_url.is_set()
            || model.description.is_set()
            || model.skills.is_set();

        if !has_changes {
            let row = Entity::find_by_id(certification_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(CertificationRepositoryError::NotFound)?;

            return Ok(model_to_record(row));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(certification_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(CertificationRepositoryError::NotFound)?;

        Ok(model_to_record(row))
    }

    async fn delete(
        &self,
        certification_id: Uuid,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        let row = Entity::find_by_id(certification_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CertificationRepositoryError::NotFound)?;

        let snapshot = model_to_record(row.clone());

        row.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(snapshot)
    }
}

fn model_to_record(model: certifications::Model) -> CertificationRecord {
    CertificationRecord {
        id: model.id,
        name: model.name,
        organization: model.organization,
        verification_url: model.verification_url,
        description: model.description,
        skills: model.skills,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn trim_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.trim().to_string()).collect()
}

fn check_url(value: &str) -> Result<(), CertificationRepositoryError> {
    if is_valid_http_url(value) {
        Ok(())
    } else {
        Err(CertificationRepositoryError::Validation(
            "Verification URL must be a valid URL".to_string(),
        ))
    }
}

fn map_db_err(e: sea_orm::DbErr) -> CertificationRepositoryError {
    CertificationRepositoryError::DatabaseError(e.to_string())
}
