use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::ports::outgoing::certification_repository::{
    CertificationRecord, CertificationRepository, CertificationRepositoryError,
    CreateCertificationData, UpdateCertificationData,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
    UpdateExperienceData,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

//
// Panicking defaults: a handler test that reaches an unconfigured port is a
// test bug (or proof that the handler touched storage when it must not).
//

#[derive(Default, Clone)]
pub struct StubProjectRepository;

#[async_trait]
impl ProjectRepository for StubProjectRepository {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn create(
        &self,
        _data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn update(
        &self,
        _project_id: Uuid,
        _data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn delete(&self, _project_id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubExperienceRepository;

#[async_trait]
impl ExperienceRepository for StubExperienceRepository {
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn create(
        &self,
        _data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn update(
        &self,
        _experience_id: Uuid,
        _data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn delete(
        &self,
        _experience_id: Uuid,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCertificationRepository;

#[async_trait]
impl CertificationRepository for StubCertificationRepository {
    async fn list(&self) -> Result<Vec<CertificationRecord>, CertificationRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn create(
        &self,
        _data: CreateCertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn update(
        &self,
        _certification_id: Uuid,
        _data: UpdateCertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        unimplemented!("not used in this test")
    }

    async fn delete(
        &self,
        _certification_id: Uuid,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        unimplemented!("not used in this test")
    }
}

//
// Single-operation mocks: constructed with the one result the test cares
// about; every other operation panics like the stubs above.
//

pub struct MockExperienceRepo {
    list_result: Option<Result<Vec<ExperienceRecord>, ExperienceRepositoryError>>,
    create_result: Option<Result<ExperienceRecord, ExperienceRepositoryError>>,
    update_result: Option<Result<ExperienceRecord, ExperienceRepositoryError>>,
    delete_result: Option<Result<ExperienceRecord, ExperienceRepositoryError>>,
}

impl MockExperienceRepo {
    fn empty() -> Self {
        Self {
            list_result: None,
            create_result: None,
            update_result: None,
            delete_result: None,
        }
    }

    pub fn list(result: Result<Vec<ExperienceRecord>, ExperienceRepositoryError>) -> Self {
        Self {
            list_result: Some(result),
            ..Self::empty()
        }
    }

    pub fn create(result: Result<ExperienceRecord, ExperienceRepositoryError>) -> Self {
        Self {
            create_result: Some(result),
            ..Self::empty()
        }
    }

    pub fn update(result: Result<ExperienceRecord, ExperienceRepositoryError>) -> Self {
        Self {
            update_result: Some(result),
            ..Self::empty()
        }
    }

    pub fn delete(result: Result<ExperienceRecord, ExperienceRepositoryError>) -> Self {
        Self {
            delete_result: Some(result),
            ..Self::empty()
        }
    }
}

#[async_trait]
impl ExperienceRepository for MockExperienceRepo {
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        self.list_result.clone().expect("list not configured")
    }

    async fn create(
        &self,
        _data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        self.create_result.clone().expect("create not configured")
    }

    async fn update(
        &self,
        _experience_id: Uuid,
        _data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        self.update_result.clone().expect("update not configured")
    }

    async fn delete(
        &self,
        _experience_id: Uuid,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        self.delete_result.clone().expect("delete not configured")
    }
}

pub struct MockCertificationRepo {
    list_result: Option<Result<Vec<CertificationRecord>, CertificationRepositoryError>>,
    create_result: Option<Result<CertificationRecord, CertificationRepositoryError>>,
    update_result: Option<Result<CertificationRecord, CertificationRepositoryError>>,
    delete_result: Option<Result<CertificationRecord, CertificationRepositoryError>>,
}

impl MockCertificationRepo {
    fn empty() -> Self {
        Self {
            list_result: None,
            create_result: None,
            update_result: None,
            delete_result: None,
        }
    }

    pub fn list(result: Result<Vec<CertificationRecord>, CertificationRepositoryError>) -> Self {
        Self {
            list_result: Some(result),
            ..Self::empty()
        }
    }

    pub fn create(result: Result<CertificationRecord, CertificationRepositoryError>) -> Self {
        Self {
            create_result: Some(result),
            ..Self::empty()
        }
    }

    pub fn update(result: Result<CertificationRecord, CertificationRepositoryError>) -> Self {
        Self {
            update_result: Some(result),
            ..Self::empty()
        }
    }

    pub fn delete(result: Result<CertificationRecord, CertificationRepositoryError>) -> Self {
        Self {
            delete_result: Some(result),
            ..Self::empty()
        }
    }
}

#[async_trait]
impl CertificationRepository for MockCertificationRepo {
    async fn list(&self) -> Result<Vec<CertificationRecord>, CertificationRepositoryError> {
        self.list_result.clone().expect("list not configured")
    }

    async fn create(
        &self,
        _data: CreateCertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        self.create_result.clone().expect("create not configured")
    }

    async fn update(
        &self,
        _certification_id: Uuid,
        _data: UpdateCertificationData,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        self.update_result.clone().expect("update not configured")
    }

    async fn delete(
        &self,
        _certification_id: Uuid,
    ) -> Result<CertificationRecord, CertificationRepositoryError> {
        self.delete_result.clone().expect("delete not configured")
    }
}
