pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_table_projects;
mod m20250810_000002_create_table_experiences;
mod m20250810_000003_create_table_certifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_table_projects::Migration),
            Box::new(m20250810_000002_create_table_experiences::Migration),
            Box::new(m20250810_000003_create_table_certifications::Migration),
        ]
    }
}
