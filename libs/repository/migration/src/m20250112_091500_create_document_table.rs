use sea_orm_migration::{
    prelude::*,
    sea_orm::{EnumIter, Iterable},
    sea_query::extension::postgres::Type,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("document_kind"))
                    .values(DocumentKind::iter())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Document::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Document::Kind)
                            .enumeration(
                                Alias::new("document_kind"),
                                DocumentKind::iter(),
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Document::Title).string())
                    .col(ColumnDef::new(Document::Date).date())
                    .col(ColumnDef::new(Document::FileKey).string())
                    .col(
                        ColumnDef::new(Document::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await?;

        manager
            .drop_type(
                Type::drop().name(Alias::new("document_kind")).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    Kind,
    Title,
    Date,
    FileKey,
    CreatedAt,
}

#[derive(Iden, EnumIter)]
pub enum DocumentKind {
    #[iden = "bulletin"]
    Bulletin,
    #[iden = "pdf"]
    Pdf,
    #[iden = "music"]
    Music,
}
