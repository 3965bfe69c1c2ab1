use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Member::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Member::EnglishName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Member::KoreanName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Member::Contact).string().not_null())
                    .col(ColumnDef::new(Member::Email).string().not_null())
                    .col(ColumnDef::new(Member::Street).string().not_null())
                    .col(ColumnDef::new(Member::Suburb).string().not_null())
                    .col(ColumnDef::new(Member::Birthday).date())
                    .col(ColumnDef::new(Member::Children).string().not_null())
                    .col(ColumnDef::new(Member::Position).string().not_null())
                    .col(
                        ColumnDef::new(Member::Vehicle)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Member::Attendance)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Member::Message).text())
                    .col(
                        ColumnDef::new(Member::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    EnglishName,
    KoreanName,
    Contact,
    Email,
    Street,
    Suburb,
    Birthday,
    Children,
    Position,
    Vehicle,
    Attendance,
    Message,
    CreatedAt,
}
