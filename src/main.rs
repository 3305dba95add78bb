pub mod health;
pub mod modules;
pub mod shared;

pub use modules::certification;
pub use modules::contact;
pub use modules::experience;
pub use modules::project;

use crate::certification::adapter::outgoing::certification_repository_postgres::CertificationRepositoryPostgres;
use crate::certification::application::ports::outgoing::certification_repository::CertificationRepository;
use crate::contact::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::contact::application::services::ContactMailer;
use crate::experience::adapter::outgoing::experience_repository_postgres::ExperienceRepositoryPostgres;
use crate::experience::application::ports::outgoing::experience_repository::ExperienceRepository;
use crate::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::shared::api::json_config::custom_json_config;
use crate::shared::api::{AdminTokenConfig, ApiReply};

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectRepository + Send + Sync>,
    pub experiences: Arc<dyn ExperienceRepository + Send + Sync>,
    pub certifications: Arc<dyn CertificationRepository + Send + Sync>,
    pub contact: ContactMailer,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let frontend_origin = env::var("FRONTEND_ORIGIN").ok();

    let admin_token = env::var("ADMIN_TOKEN").ok();
    if admin_token.is_none() {
        warn!("ADMIN_TOKEN is not set; content mutations are unauthenticated");
    }

    // SMTP SETUPS
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let contact_inbox = env::var("CONTACT_INBOX").expect("CONTACT_INBOX not set");

    let smtp_sender = if env_name == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
    };

    let server_url = format!("{host}:{port}");

    // Database connection; startup aborts if this fails.
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    info!("Connected to database");

    // Mail relay health is checked once, best-effort.
    if let Err(e) = smtp_sender.verify().await {
        warn!("Email transporter verification failed: {}", e);
    }

    let db_arc = Arc::new(conn);

    let state = AppState {
        projects: Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc))),
        experiences: Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(&db_arc))),
        certifications: Arc::new(CertificationRepositoryPostgres::new(Arc::clone(&db_arc))),
        contact: ContactMailer::new(Arc::new(smtp_sender), contact_inbox),
    };

    let admin_config = AdminTokenConfig(admin_token);
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let cors = match &frontend_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(admin_config.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .wrap(cors)
            .configure(init_routes)
            .default_service(web::route().to(route_not_found))
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::index);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Experiences
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Certifications
    cfg.service(crate::certification::adapter::incoming::web::routes::get_certifications_handler);
    cfg.service(crate::certification::adapter::incoming::web::routes::create_certification_handler);
    cfg.service(crate::certification::adapter::incoming::web::routes::update_certification_handler);
    cfg.service(crate::certification::adapter::incoming::web::routes::delete_certification_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::send_contact_handler);
}

async fn route_not_found() -> HttpResponse {
    ApiReply::not_found("Route not found")
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
