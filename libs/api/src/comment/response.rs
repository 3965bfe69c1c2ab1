use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PostCommentResp {
    pub id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct CommentResp {
    pub id: i32,
    pub post_id: i32,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CommentEntity> for CommentResp {
    fn from(value: CommentEntity) -> Self {
        Self {
            id: value.id,
            post_id: value.post_id,
            author: value.author,
            content: value.content,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
