use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use entity::prelude::*;

pub mod request;
pub mod response;

use crate::auth;
use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::{PatchCommentParam, PostCommentParam};
use self::response::PostCommentResp;

/// Comment on a post
#[utoipa::path(
    post,
    path = "/posts/:id/comments",
    responses(
        (status = 200, description = "Comment on a post successfully", body = [PostCommentResp])
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn post_comment(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(params): Json<PostCommentParam>,
) -> ApiResponse<Json<PostCommentResp>> {
    let user_name = auth::require_user(
        &headers,
        &state.session,
        &format!("/posts/{}", id),
    )?;

    let post = state
        .repo
        .post
        .find_by_id(id)
        .await
        .into_response("502-007")?;
    let Some(post) = post else {
        return Err(ApiError::NotFound("post was not found".to_string()));
    };

    let comment_id = state
        .repo
        .comment
        .save(CommentEntity {
            post_id: post.id,
            author: user_name,
            content: params.content,
            ..Default::default()
        })
        .await
        .into_response("502-011")?;

    Ok(Json(PostCommentResp { id: comment_id }))
}

/// Edit a comment; only its author may
#[utoipa::path(
    patch,
    path = "/comments/:id",
    responses(
        (status = 200, description = "Edit a comment successfully")
    ),
    params(
        ("id", description = "comment id"),
    )
)]
pub async fn patch_comment(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(params): Json<PatchCommentParam>,
) -> ApiResponse<()> {
    let user_name = auth::session_user(&headers, &state.session)?;

    let comment = state
        .repo
        .comment
        .find_by_id(id)
        .await
        .into_response("502-010")?;
    let Some(comment) = comment else {
        return Err(ApiError::NotFound("comment was not found".to_string()));
    };

    if !comment.editable_by(user_name.as_deref()) {
        return Err(ApiError::PermissionDenied(
            "No right to edit".to_string(),
        ));
    }

    state
        .repo
        .comment
        .update_content(id, &params.content)
        .await
        .into_response("502-011")?;

    Ok(())
}

/// Delete a comment; only its author may
#[utoipa::path(
    delete,
    path = "/comments/:id",
    responses(
        (status = 200, description = "Delete a comment successfully")
    ),
    params(
        ("id", description = "comment id"),
    )
)]
pub async fn delete_comment(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> ApiResponse<()> {
    let user_name = auth::session_user(&headers, &state.session)?;

    let comment = state
        .repo
        .comment
        .find_by_id(id)
        .await
        .into_response("502-010")?;
    let Some(comment) = comment else {
        return Err(ApiError::NotFound("comment was not found".to_string()));
    };

    if !comment.editable_by(user_name.as_deref()) {
        return Err(ApiError::PermissionDenied(
            "No right to delete Comment".to_string(),
        ));
    }

    state
        .repo
        .comment
        .delete(id)
        .await
        .into_response("502-012")?;

    Ok(())
}
