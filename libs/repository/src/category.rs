use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<category::Model> for CategoryEntity {
    fn from(value: category::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
        }
    }
}

impl From<CategoryEntity> for category::ActiveModel {
    fn from(value: CategoryEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            name: ActiveValue::Set(value.name),
            slug: ActiveValue::Set(value.slug),
        }
    }
}

impl CategoryRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<CategoryEntity>> {
        let categories = Category::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;

        Ok(categories.into_iter().map(CategoryEntity::from).collect())
    }

    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> anyhow::Result<Option<CategoryEntity>> {
        let category = Category::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;

        Ok(category.map(CategoryEntity::from))
    }

    pub async fn save(&self, category: CategoryEntity) -> anyhow::Result<i32> {
        let category =
            Category::insert(category::ActiveModel::from(category))
                .exec(&self.db)
                .await?;

        Ok(category.last_insert_id)
    }
}
