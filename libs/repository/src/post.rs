use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::post::SearchField;
use entity::prelude::*;

/// Review board page size.
pub const PAGE_SIZE: u64 = 4;

#[derive(Clone, Debug)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<post::Model> for PostEntity {
    fn from(value: post::Model) -> Self {
        Self {
            id: value.id,
            date: value.date,
            name: value.name,
            title: value.title,
            content: value.content,
            category_id: value.category_id,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<PostEntity> for post::ActiveModel {
    fn from(value: PostEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            date: ActiveValue::Set(value.date),
            name: ActiveValue::Set(value.name),
            title: ActiveValue::Set(value.title),
            content: ActiveValue::Set(value.content),
            category_id: ActiveValue::Set(value.category_id),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl PostRepository {
    /// One page of posts, newest first. Pages are 1-based; the number of
    /// pages comes back alongside so the list view can render a pager.
    pub async fn find_paginate(
        &self,
        page: u64,
    ) -> anyhow::Result<(Vec<PostEntity>, u64)> {
        let paginator = Post::find()
            .order_by_desc(post::Column::CreatedAt)
            .paginate(&self.db, PAGE_SIZE);

        let pages = paginator.num_pages().await?;
        let posts = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((posts.into_iter().map(PostEntity::from).collect(), pages))
    }

    pub async fn count_all(&self) -> anyhow::Result<u64> {
        let count = Post::find().count(&self.db).await?;

        Ok(count)
    }

    pub async fn count_uncategorized(&self) -> anyhow::Result<u64> {
        let count = Post::find()
            .filter(post::Column::CategoryId.is_null())
            .count(&self.db)
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<PostEntity>> {
        let post = Post::find_by_id(id).one(&self.db).await?;

        Ok(post.map(PostEntity::from))
    }

    /// Case-insensitive substring search. `All` is the OR of the three
    /// searchable columns.
    pub async fn search(
        &self,
        term: &str,
        field: SearchField,
    ) -> anyhow::Result<Vec<PostEntity>> {
        let condition = match field {
            SearchField::All => Condition::any()
                .add(icontains(post::Column::Title, term))
                .add(icontains(post::Column::Content, term))
                .add(icontains(post::Column::Name, term)),
            SearchField::Title => {
                Condition::any().add(icontains(post::Column::Title, term))
            }
            SearchField::Content => {
                Condition::any().add(icontains(post::Column::Content, term))
            }
            SearchField::Name => {
                Condition::any().add(icontains(post::Column::Name, term))
            }
        };

        let posts = Post::find()
            .filter(condition)
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(posts.into_iter().map(PostEntity::from).collect())
    }

    /// `None` selects the posts whose category was never set or was
    /// nulled by a category deletion.
    pub async fn find_by_category(
        &self,
        category_id: Option<i32>,
    ) -> anyhow::Result<Vec<PostEntity>> {
        let query = match category_id {
            Some(id) => {
                Post::find().filter(post::Column::CategoryId.eq(id))
            }
            None => {
                Post::find().filter(post::Column::CategoryId.is_null())
            }
        };

        let posts = query
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(posts.into_iter().map(PostEntity::from).collect())
    }

    pub async fn save(&self, post: PostEntity) -> anyhow::Result<i32> {
        let post = Post::insert(post::ActiveModel::from(post))
            .exec(&self.db)
            .await?;

        Ok(post.last_insert_id)
    }

    /// Only the writable fields; author and timestamps never change here.
    pub async fn update_fields(
        &self,
        id: i32,
        title: Option<String>,
        content: Option<String>,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<Option<PostEntity>> {
        let Some(post) = Post::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut post: post::ActiveModel = post.into();
        if let Some(title) = title {
            post.title = ActiveValue::Set(title);
        }
        if let Some(content) = content {
            post.content = ActiveValue::Set(content);
        }
        if let Some(date) = date {
            post.date = ActiveValue::Set(date);
        }

        let post = post.update(&self.db).await?;

        Ok(Some(PostEntity::from(post)))
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<()> {
        Post::delete(post::ActiveModel {
            id: ActiveValue::Set(id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(())
    }
}

fn icontains(column: post::Column, term: &str) -> SimpleExpr {
    let pattern =
        format!("%{}%", crate::escape_like(&term.to_lowercase()));

    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(pattern).escape('\\'))
}
