use actix_web::web;
use std::sync::Arc;

use crate::modules::certification::application::ports::outgoing::certification_repository::CertificationRepository;
use crate::modules::contact::adapter::outgoing::mock_sender::MockEmailSender;
use crate::modules::contact::application::services::ContactMailer;
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepository;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    projects: Arc<dyn ProjectRepository + Send + Sync>,
    experiences: Arc<dyn ExperienceRepository + Send + Sync>,
    certifications: Arc<dyn CertificationRepository + Send + Sync>,
    contact: ContactMailer,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            projects: Arc::new(StubProjectRepository),
            experiences: Arc::new(StubExperienceRepository),
            certifications: Arc::new(StubCertificationRepository),
            contact: ContactMailer::new(
                Arc::new(MockEmailSender::new()),
                "operator@example.com".to_string(),
            ),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_projects(mut self, repo: impl ProjectRepository + Send + Sync + 'static) -> Self {
        self.projects = Arc::new(repo);
        self
    }

    pub fn with_experiences(
        mut self,
        repo: impl ExperienceRepository + Send + Sync + 'static,
    ) -> Self {
        self.experiences = Arc::new(repo);
        self
    }

    pub fn with_certifications(
        mut self,
        repo: impl CertificationRepository + Send + Sync + 'static,
    ) -> Self {
        self.certifications = Arc::new(repo);
        self
    }

    pub fn with_contact_mailer(mut self, mailer: ContactMailer) -> Self {
        self.contact = mailer;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            projects: self.projects,
            experiences: self.experiences,
            certifications: self.certifications,
            contact: self.contact,
        })
    }
}
