use sea_orm_migration::prelude::*;

use crate::m20250112_091800_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comment::PostId).integer().not_null())
                    .col(ColumnDef::new(Comment::Author).string().not_null())
                    .col(ColumnDef::new(Comment::Content).text().not_null())
                    .col(
                        ColumnDef::new(Comment::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Comment::UpdatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_post_id")
                            .from(Comment::Table, Comment::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    PostId,
    Author,
    Content,
    CreatedAt,
    UpdatedAt,
}
