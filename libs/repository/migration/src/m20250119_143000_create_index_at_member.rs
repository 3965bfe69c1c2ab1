use sea_orm_migration::prelude::*;

use crate::m20250112_091400_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Member::Table)
                    .name("idx_member_email")
                    .col(Member::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Member::Table)
                    .name("idx_member_email")
                    .to_owned(),
            )
            .await
    }
}
