use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CommentRepository {
    db: DatabaseConnection,
}

impl CommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<comment::Model> for CommentEntity {
    fn from(value: comment::Model) -> Self {
        Self {
            id: value.id,
            post_id: value.post_id,
            author: value.author,
            content: value.content,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.map(|f| f.and_utc()),
        }
    }
}

impl From<CommentEntity> for comment::ActiveModel {
    fn from(value: CommentEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            post_id: ActiveValue::Set(value.post_id),
            author: ActiveValue::Set(value.author),
            content: ActiveValue::Set(value.content),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
            updated_at: ActiveValue::Set(
                value.updated_at.map(|f| f.naive_utc()),
            ),
        }
    }
}

impl CommentRepository {
    /// Comments under a post, oldest first.
    pub async fn find_by_post(
        &self,
        post_id: i32,
    ) -> anyhow::Result<Vec<CommentEntity>> {
        let comments = Comment::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(comments.into_iter().map(CommentEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<CommentEntity>> {
        let comment = Comment::find_by_id(id).one(&self.db).await?;

        Ok(comment.map(CommentEntity::from))
    }

    pub async fn save(&self, comment: CommentEntity) -> anyhow::Result<i32> {
        let comment =
            Comment::insert(comment::ActiveModel::from(comment))
                .exec(&self.db)
                .await?;

        Ok(comment.last_insert_id)
    }

    pub async fn update_content(
        &self,
        id: i32,
        content: &str,
    ) -> anyhow::Result<()> {
        let comment = comment::ActiveModel {
            id: ActiveValue::Set(id),
            content: ActiveValue::Set(content.to_string()),
            updated_at: ActiveValue::Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        };
        comment.update(&self.db).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<()> {
        Comment::delete(comment::ActiveModel {
            id: ActiveValue::Set(id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(())
    }
}
