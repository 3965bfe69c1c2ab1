use axum::{
    extract::{Path, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use entity::gallery;
use entity::prelude::*;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{error, info, warn};
use uuid::Uuid;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::util::guess_content_type;
use crate::{ApiError, ApiState};

use self::request::PostEntryParam;
use self::response::{
    EntryResp, GetEntriesResp, GetEntryResp, PostEntryResp,
};

/// List gallery entries, newest first
#[utoipa::path(
    get,
    path = "/gallery",
    responses(
        (status = 200, description = "List gallery entries successfully", body = [GetEntriesResp])
    )
)]
pub async fn get_entries(
    State(state): State<ApiState>,
) -> ApiResponse<Json<GetEntriesResp>> {
    let entries = state
        .repo
        .gallery
        .find_all()
        .await
        .into_response("502-005")?;

    let response = Json(GetEntriesResp {
        entries: entries
            .into_iter()
            .map(|e| EntryResp::new(e, &state.storage))
            .collect(),
    });

    Ok(response)
}

/// List a gallery entry
#[utoipa::path(
    get,
    path = "/gallery/:id",
    responses(
        (status = 200, description = "List a gallery entry successfully", body = [GetEntryResp])
    ),
    params(
        ("id", description = "gallery entry id"),
    )
)]
pub async fn get_entry(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<GetEntryResp>> {
    let entry = state
        .repo
        .gallery
        .find_by_id(id)
        .await
        .into_response("502-005")?;

    let Some(entry) = entry else {
        return Err(ApiError::NotFound(
            "gallery entry was not found".to_string(),
        ));
    };

    Ok(Json(GetEntryResp {
        entry: EntryResp::new(entry, &state.storage),
    }))
}

/// Upload a gallery image
#[utoipa::path(
    post,
    path = "/gallery",
    responses(
        (status = 200, description = "Upload a gallery image successfully", body = [PostEntryResp])
    )
)]
pub async fn post_entry(
    State(state): State<ApiState>,
    Json(params): Json<PostEntryParam>,
) -> ApiResponse<Json<PostEntryResp>> {
    let bytes = STANDARD.decode(&params.data).map_err(|_| {
        ApiError::ClientError("data must be base64 encoded".to_string())
    })?;

    let key = format!("gallery/{}-{}", Uuid::new_v4(), params.file_name);

    state
        .storage
        .put(&key, bytes, guess_content_type(&params.file_name))
        .await
        .into_response("502-015")?;

    let id = state
        .repo
        .gallery
        .save(GalleryEntity {
            image_key: key,
            ..Default::default()
        })
        .await
        .into_response("502-006")?;

    // Fire-and-forget: an image already stored as WebP never queues a
    // job, anything else queues exactly one.
    if gallery::needs_conversion(&params.file_name) {
        match state.convert_tx.try_send(id) {
            Ok(()) => {
                info!(task = "dispatch webp conversion", id = id)
            }
            Err(TrySendError::Full(_)) => warn!(
                task = "dispatch webp conversion",
                id = id,
                error = "queue is full, dropped"
            ),
            Err(TrySendError::Closed(_)) => error!(
                task = "dispatch webp conversion",
                id = id,
                error = "worker is gone"
            ),
        }
    }

    Ok(Json(PostEntryResp { id }))
}
