use axum::{extract::State, Json};
use entity::category::slugify;
use entity::prelude::*;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::PostCategoryParam;
use self::response::{
    CategoryResp, GetCategoriesResp, PostCategoryResp,
};

/// List review board categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List categories successfully", body = [GetCategoriesResp])
    )
)]
pub async fn get_categories(
    State(state): State<ApiState>,
) -> ApiResponse<Json<GetCategoriesResp>> {
    let categories = state
        .repo
        .category
        .find_all()
        .await
        .into_response("502-013")?;

    Ok(Json(GetCategoriesResp {
        categories: categories.into_iter().map(CategoryResp::from).collect(),
    }))
}

/// Create a review board category
#[utoipa::path(
    post,
    path = "/categories",
    responses(
        (status = 200, description = "Create a category successfully", body = [PostCategoryResp])
    )
)]
pub async fn post_category(
    State(state): State<ApiState>,
    Json(params): Json<PostCategoryParam>,
) -> ApiResponse<Json<PostCategoryResp>> {
    // The slug is prefilled from the name unless given explicitly.
    let slug = match params.slug.filter(|s| !s.trim().is_empty()) {
        Some(slug) => slug,
        None => slugify(&params.name),
    };

    if slug.is_empty() {
        return Err(ApiError::ClientError(format!(
            "no slug could be derived from '{}'",
            params.name
        )));
    }

    let existing = state
        .repo
        .category
        .find_by_slug(&slug)
        .await
        .into_response("502-013")?;
    if existing.is_some() {
        return Err(ApiError::ClientError(format!(
            "a category with slug '{}' already exists",
            slug
        )));
    }

    let id = state
        .repo
        .category
        .save(CategoryEntity {
            name: params.name,
            slug,
            ..Default::default()
        })
        .await
        .into_response("502-014")?;

    Ok(Json(PostCategoryResp { id }))
}
