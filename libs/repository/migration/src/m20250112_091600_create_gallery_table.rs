use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gallery::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Gallery::ImageKey)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Gallery::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gallery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gallery {
    Table,
    Id,
    ImageKey,
    CreatedAt,
}
