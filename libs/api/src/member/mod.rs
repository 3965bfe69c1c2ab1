use axum::{
    extract::{Query, State},
    Json,
};
use entity::prelude::*;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::{GetMembersParam, PostMemberParam};
use self::response::{GetMembersResp, MemberResp, PostMemberResp};

/// List members, newest first
#[utoipa::path(
    get,
    path = "/members",
    responses(
        (status = 200, description = "List members successfully", body = [GetMembersResp])
    ),
    params(
        GetMembersParam
    )
)]
pub async fn get_members(
    State(state): State<ApiState>,
    Query(params): Query<GetMembersParam>,
) -> ApiResponse<Json<GetMembersResp>> {
    let members = match params.search {
        Some(term) => state.repo.member.search(&term).await,
        None => state.repo.member.find_all().await,
    }
    .into_response("502-001")?;

    let response = Json(GetMembersResp {
        members: members.into_iter().map(MemberResp::from).collect(),
    });

    Ok(response)
}

/// Register a member
#[utoipa::path(
    post,
    path = "/members",
    responses(
        (status = 200, description = "Register a member successfully", body = [PostMemberResp])
    )
)]
pub async fn post_member(
    State(state): State<ApiState>,
    Json(params): Json<PostMemberParam>,
) -> ApiResponse<Json<PostMemberResp>> {
    let member = MemberEntity {
        english_name: params.english_name,
        korean_name: params.korean_name,
        contact: params.contact.unwrap_or_default(),
        email: params.email,
        street: params.street.unwrap_or_default(),
        suburb: params.suburb.unwrap_or_default(),
        birthday: params.birthday,
        children: params.children.unwrap_or_default(),
        position: params.position.unwrap_or_default(),
        vehicle: params.vehicle.unwrap_or_default(),
        attendance: params.attendance.unwrap_or_default(),
        message: params.message,
        ..Default::default()
    };

    member
        .validate()
        .map_err(|e| ApiError::ClientError(e.to_string()))?;

    let existing = state
        .repo
        .member
        .find_by_email(&member.email)
        .await
        .into_response("502-001")?;
    if existing.is_some() {
        return Err(ApiError::ClientError(format!(
            "a member with email '{}' already exists",
            member.email
        )));
    }

    let id = state
        .repo
        .member
        .save(member)
        .await
        .into_response("502-002")?;

    Ok(Json(PostMemberResp { id }))
}
