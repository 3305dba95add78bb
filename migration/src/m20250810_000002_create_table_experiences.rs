use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::Title).text().not_null())
                    .col(ColumnDef::new(Experiences::Company).text().not_null())
                    .col(ColumnDef::new(Experiences::Location).text().not_null())
                    // Free-form date strings, not parsed timestamps
                    .col(ColumnDef::new(Experiences::StartDate).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::EndDate)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Achievements)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experiences_created_at
                ON experiences (created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_experiences_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
    Description,
    Technologies,
    Achievements,
    CreatedAt,
    UpdatedAt,
}
