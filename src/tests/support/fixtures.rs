use chrono::Utc;
use uuid::Uuid;

use crate::modules::certification::application::ports::outgoing::certification_repository::CertificationRecord;
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRecord;

pub fn experience_record(title: &str) -> ExperienceRecord {
    ExperienceRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        start_date: "Jan 2023".to_string(),
        end_date: String::new(),
        description: "Built services".to_string(),
        technologies: vec!["Rust".to_string()],
        achievements: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn certification_record(name: &str) -> CertificationRecord {
    CertificationRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        organization: "Amazon".to_string(),
        verification_url: String::new(),
        description: "Cloud cert".to_string(),
        skills: vec!["EC2".to_string(), "S3".to_string()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
