use axum::{
    extract::{Path, Query, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use entity::document::Kind;
use entity::prelude::*;
use uuid::Uuid;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::util::guess_content_type;
use crate::{ApiError, ApiState};

use self::request::{GetDocumentsParam, PostDocumentParam};
use self::response::{
    DocumentResp, GetDocumentResp, GetDocumentsResp, PostDocumentResp,
};

/// List uploaded documents, newest first
#[utoipa::path(
    get,
    path = "/documents",
    responses(
        (status = 200, description = "List documents successfully", body = [GetDocumentsResp])
    ),
    params(
        GetDocumentsParam
    )
)]
pub async fn get_documents(
    State(state): State<ApiState>,
    Query(params): Query<GetDocumentsParam>,
) -> ApiResponse<Json<GetDocumentsResp>> {
    let kind = match params.kind.as_deref() {
        Some(value) => Some(Kind::parse(value).ok_or_else(|| {
            ApiError::ClientError(format!("unknown document kind '{}'", value))
        })?),
        None => None,
    };

    let documents = state
        .repo
        .document
        .find_all(kind)
        .await
        .into_response("502-003")?;

    let response = Json(GetDocumentsResp {
        documents: documents
            .into_iter()
            .map(|d| DocumentResp::new(d, &state.storage))
            .collect(),
    });

    Ok(response)
}

/// List a document
#[utoipa::path(
    get,
    path = "/documents/:id",
    responses(
        (status = 200, description = "List a document successfully", body = [GetDocumentResp])
    ),
    params(
        ("id", description = "document id"),
    )
)]
pub async fn get_document(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<GetDocumentResp>> {
    let document = state
        .repo
        .document
        .find_by_id(id)
        .await
        .into_response("502-003")?;

    let Some(document) = document else {
        return Err(ApiError::NotFound("document was not found".to_string()));
    };

    Ok(Json(GetDocumentResp {
        document: DocumentResp::new(document, &state.storage),
    }))
}

/// Upload a bulletin, pdf or sheet music file
#[utoipa::path(
    post,
    path = "/documents",
    responses(
        (status = 200, description = "Upload a document successfully", body = [PostDocumentResp])
    )
)]
pub async fn post_document(
    State(state): State<ApiState>,
    Json(params): Json<PostDocumentParam>,
) -> ApiResponse<Json<PostDocumentResp>> {
    let kind = Kind::parse(&params.kind).ok_or_else(|| {
        ApiError::ClientError(format!(
            "unknown document kind '{}'",
            params.kind
        ))
    })?;

    let bytes = STANDARD.decode(&params.data).map_err(|_| {
        ApiError::ClientError("data must be base64 encoded".to_string())
    })?;

    let key = format!(
        "{}{}-{}",
        kind.storage_prefix(),
        Uuid::new_v4(),
        params.file_name
    );

    let document = DocumentEntity {
        kind,
        title: params.title,
        date: params.date,
        file_key: Some(key.clone()),
        ..Default::default()
    };
    document
        .validate()
        .map_err(|e| ApiError::ClientError(e.to_string()))?;

    state
        .storage
        .put(&key, bytes, guess_content_type(&params.file_name))
        .await
        .into_response("502-015")?;

    let id = state
        .repo
        .document
        .save(document)
        .await
        .into_response("502-004")?;

    Ok(Json(PostDocumentResp {
        id,
        url: state.storage.public_url(&key),
    }))
}
