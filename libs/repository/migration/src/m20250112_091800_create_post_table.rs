use sea_orm_migration::prelude::*;

use crate::m20250112_091700_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Post::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Post::Date).date().not_null())
                    .col(ColumnDef::new(Post::Name).string().not_null())
                    .col(ColumnDef::new(Post::Title).string().not_null())
                    .col(ColumnDef::new(Post::Content).text().not_null())
                    .col(ColumnDef::new(Post::CategoryId).integer())
                    .col(
                        ColumnDef::new(Post::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        // Deleting a category ungroups its posts instead
                        // of deleting them.
                        ForeignKey::create()
                            .name("fk_post_category_id")
                            .from(Post::Table, Post::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Post::Table)
                    .name("idx_post_created_at")
                    .col(Post::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Date,
    Name,
    Title,
    Content,
    CategoryId,
    CreatedAt,
}
