pub use sea_orm_migration::prelude::*;

mod m20250112_091400_create_member_table;
mod m20250112_091500_create_document_table;
mod m20250112_091600_create_gallery_table;
mod m20250112_091700_create_category_table;
mod m20250112_091800_create_post_table;
mod m20250112_091900_create_comment_table;
mod m20250119_143000_create_index_at_member;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250112_091400_create_member_table::Migration),
            Box::new(m20250112_091500_create_document_table::Migration),
            Box::new(m20250112_091600_create_gallery_table::Migration),
            Box::new(m20250112_091700_create_category_table::Migration),
            Box::new(m20250112_091800_create_post_table::Migration),
            Box::new(m20250112_091900_create_comment_table::Migration),
            Box::new(m20250119_143000_create_index_at_member::Migration),
        ]
    }
}
