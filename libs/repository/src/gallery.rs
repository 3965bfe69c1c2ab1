use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait,
    QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct GalleryRepository {
    db: DatabaseConnection,
}

impl GalleryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<gallery::Model> for GalleryEntity {
    fn from(value: gallery::Model) -> Self {
        Self {
            id: value.id,
            image_key: value.image_key,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<GalleryEntity> for gallery::ActiveModel {
    fn from(value: GalleryEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            image_key: ActiveValue::Set(value.image_key),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl GalleryRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<GalleryEntity>> {
        let entries = Gallery::find()
            .order_by_desc(gallery::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(entries.into_iter().map(GalleryEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<GalleryEntity>> {
        let entry = Gallery::find_by_id(id).one(&self.db).await?;

        Ok(entry.map(GalleryEntity::from))
    }

    pub async fn save(&self, entry: GalleryEntity) -> anyhow::Result<i32> {
        let entry = Gallery::insert(gallery::ActiveModel::from(entry))
            .exec(&self.db)
            .await?;

        Ok(entry.last_insert_id)
    }

    /// Repoints the entry at its converted object.
    pub async fn update_image_key(
        &self,
        id: i32,
        image_key: &str,
    ) -> anyhow::Result<()> {
        let entry = gallery::ActiveModel {
            id: ActiveValue::Set(id),
            image_key: ActiveValue::Set(image_key.to_string()),
            ..Default::default()
        };
        entry.update(&self.db).await?;

        Ok(())
    }
}
