use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use entity::category::CategoryFilter;
use entity::post::SearchField;
use entity::prelude::*;
use tracing::warn;

pub mod request;
pub mod response;

use crate::auth;
use crate::category::response::CategoryResp;
use crate::comment::response::CommentResp;
use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::{
    GetPostsParam, PatchPostParam, PostPostParam, SearchPostsParam,
};
use self::response::{
    GetPostResp, GetPostsByCategoryResp, GetPostsResp, PostPostResp,
    PostResp, SearchPostsResp,
};

/// List review board posts, paginated, newest first
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "List posts successfully", body = [GetPostsResp])
    ),
    params(
        GetPostsParam
    )
)]
pub async fn get_posts(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<GetPostsParam>,
) -> ApiResponse<Json<GetPostsResp>> {
    let page = params.page.unwrap_or(1);

    let (posts, pages) = state
        .repo
        .post
        .find_paginate(page)
        .await
        .into_response("502-007")?;
    let post_count = state
        .repo
        .post
        .count_all()
        .await
        .into_response("502-007")?;
    let posts_without_category = state
        .repo
        .post
        .count_uncategorized()
        .await
        .into_response("502-007")?;
    let categories = state
        .repo
        .category
        .find_all()
        .await
        .into_response("502-013")?;

    let user_name = auth::session_user(&headers, &state.session)?;

    // A failed search leaves a one-shot note behind; surface and clear
    // it here.
    let search_error = match auth::session_token(&headers) {
        Some(token) => state
            .session
            .take_search_error(token)
            .into_response("502-016")?,
        None => None,
    };

    Ok(Json(GetPostsResp {
        posts: posts.into_iter().map(PostResp::from).collect(),
        page,
        pages,
        post_count,
        posts_without_category,
        categories: categories.into_iter().map(CategoryResp::from).collect(),
        user_name,
        search_error,
    }))
}

/// List a post with its comments
#[utoipa::path(
    get,
    path = "/posts/:id",
    responses(
        (status = 200, description = "List a post successfully", body = [GetPostResp])
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn get_post(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> ApiResponse<Json<GetPostResp>> {
    let post = state
        .repo
        .post
        .find_by_id(id)
        .await
        .into_response("502-007")?;

    let Some(post) = post else {
        return Err(ApiError::NotFound("post was not found".to_string()));
    };

    let comments = state
        .repo
        .comment
        .find_by_post(post.id)
        .await
        .into_response("502-010")?;
    let post_count = state
        .repo
        .post
        .count_all()
        .await
        .into_response("502-007")?;
    let user_name = auth::session_user(&headers, &state.session)?;

    Ok(Json(GetPostResp {
        post: PostResp::from(post),
        comments: comments.into_iter().map(CommentResp::from).collect(),
        post_count,
        user_name,
    }))
}

/// Write a post
#[utoipa::path(
    post,
    path = "/posts",
    responses(
        (status = 200, description = "Write a post successfully", body = [PostPostResp])
    )
)]
pub async fn post_post(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(params): Json<PostPostParam>,
) -> ApiResponse<Json<PostPostResp>> {
    // The author is always the session user, never client input.
    let user_name = auth::require_user(&headers, &state.session, "/posts")?;

    let post = PostEntity {
        date: params.date.unwrap_or_else(|| Utc::now().date_naive()),
        name: user_name,
        title: params.title,
        content: params.content,
        category_id: params.category_id,
        ..Default::default()
    };

    let id = state
        .repo
        .post
        .save(post)
        .await
        .into_response("502-008")?;

    Ok(Json(PostPostResp { id }))
}

/// Edit a post's title, content or date
#[utoipa::path(
    patch,
    path = "/posts/:id",
    responses(
        (status = 200, description = "Edit a post successfully", body = [PostPostResp])
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn patch_post(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(params): Json<PatchPostParam>,
) -> ApiResponse<Json<PostPostResp>> {
    let post = state
        .repo
        .post
        .update_fields(id, params.title, params.content, params.date)
        .await
        .into_response("502-008")?;

    let Some(post) = post else {
        return Err(ApiError::NotFound("post was not found".to_string()));
    };

    Ok(Json(PostPostResp { id: post.id }))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/posts/:id",
    responses(
        (status = 200, description = "Delete a post successfully")
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn delete_post(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<()> {
    let post = state
        .repo
        .post
        .find_by_id(id)
        .await
        .into_response("502-007")?;

    if post.is_none() {
        return Err(ApiError::NotFound("post was not found".to_string()));
    }

    state
        .repo
        .post
        .delete(id)
        .await
        .into_response("502-009")?;

    Ok(())
}

/// Search posts by title, content or author name
#[utoipa::path(
    get,
    path = "/posts/search",
    responses(
        (status = 200, description = "Search posts successfully", body = [SearchPostsResp])
    ),
    params(
        SearchPostsParam
    )
)]
pub async fn search_posts(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<SearchPostsParam>,
) -> ApiResponse<Json<SearchPostsResp>> {
    let Some(field) = SearchField::parse(params.field.as_deref()) else {
        // An unrecognized field is a not-found, not a query error. The
        // message is kept for the next list view.
        let message = format!("No results found for '{}'", params.q);
        if let Some(token) = auth::session_token(&headers) {
            if let Err(err) =
                state.session.set_search_error(token, &message)
            {
                warn!(task = "store search error", error = err.to_string());
            }
        }
        return Err(ApiError::NotFound(message));
    };

    let posts = state
        .repo
        .post
        .search(&params.q, field)
        .await
        .into_response("502-007")?;

    Ok(Json(SearchPostsResp {
        search_info: format!("Search: \"{}\"", params.q),
        posts: posts.into_iter().map(PostResp::from).collect(),
    }))
}

/// List posts under a category; the `_none` slug selects uncategorized
/// posts
#[utoipa::path(
    get,
    path = "/posts/category/:slug",
    responses(
        (status = 200, description = "List posts by category successfully", body = [GetPostsByCategoryResp])
    ),
    params(
        ("slug", description = "category slug, or `_none`"),
    )
)]
pub async fn get_posts_by_category(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> ApiResponse<Json<GetPostsByCategoryResp>> {
    let category = match CategoryFilter::from_slug(&slug) {
        CategoryFilter::Uncategorized => None,
        CategoryFilter::Slug(slug) => {
            let category = state
                .repo
                .category
                .find_by_slug(&slug)
                .await
                .into_response("502-013")?;

            let Some(category) = category else {
                return Err(ApiError::NotFound(format!(
                    "no category for slug '{}'",
                    slug
                )));
            };

            Some(category)
        }
    };

    let posts = state
        .repo
        .post
        .find_by_category(category.as_ref().map(|c| c.id))
        .await
        .into_response("502-007")?;
    let posts_without_category = state
        .repo
        .post
        .count_uncategorized()
        .await
        .into_response("502-007")?;
    let categories = state
        .repo
        .category
        .find_all()
        .await
        .into_response("502-013")?;

    Ok(Json(GetPostsByCategoryResp {
        category: category.map(CategoryResp::from),
        posts: posts.into_iter().map(PostResp::from).collect(),
        posts_without_category,
        categories: categories.into_iter().map(CategoryResp::from).collect(),
    }))
}
