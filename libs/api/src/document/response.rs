use chrono::{DateTime, NaiveDate, Utc};
use entity::prelude::*;
use serde::Serialize;
use storage::Storage;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GetDocumentsResp {
    pub documents: Vec<DocumentResp>,
}

#[derive(Serialize, ToSchema)]
pub struct GetDocumentResp {
    pub document: DocumentResp,
}

#[derive(Serialize, ToSchema)]
pub struct PostDocumentResp {
    pub id: i32,
    pub url: String,
}

#[derive(Serialize, ToSchema)]
pub struct DocumentResp {
    pub id: i32,
    pub kind: String,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DocumentResp {
    pub fn new(value: DocumentEntity, storage: &Storage) -> Self {
        Self {
            id: value.id,
            kind: value.kind.into(),
            title: value.title,
            date: value.date,
            url: value.file_key.map(|key| storage.public_url(&key)),
            created_at: value.created_at,
        }
    }
}
