use chrono::{DateTime, NaiveDate, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::category::response::CategoryResp;
use crate::comment::response::CommentResp;

#[derive(Serialize, ToSchema)]
pub struct GetPostsResp {
    pub posts: Vec<PostResp>,
    pub page: u64,
    pub pages: u64,
    pub post_count: u64,
    pub posts_without_category: u64,
    pub categories: Vec<CategoryResp>,
    pub user_name: Option<String>,
    pub search_error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct GetPostResp {
    pub post: PostResp,
    pub comments: Vec<CommentResp>,
    pub post_count: u64,
    pub user_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PostPostResp {
    pub id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct SearchPostsResp {
    pub search_info: String,
    pub posts: Vec<PostResp>,
}

#[derive(Serialize, ToSchema)]
pub struct GetPostsByCategoryResp {
    /// Absent for the "no category" sentinel
    pub category: Option<CategoryResp>,
    pub posts: Vec<PostResp>,
    pub posts_without_category: u64,
    pub categories: Vec<CategoryResp>,
}

#[derive(Serialize, ToSchema)]
pub struct PostResp {
    pub id: i32,
    pub date: NaiveDate,
    pub name: String,
    pub title: String,
    pub content: String,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<PostEntity> for PostResp {
    fn from(value: PostEntity) -> Self {
        Self {
            id: value.id,
            date: value.date,
            name: value.name,
            title: value.title,
            content: value.content,
            category_id: value.category_id,
            created_at: value.created_at,
        }
    }
}
