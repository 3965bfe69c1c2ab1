use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use storage::Storage;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GetEntriesResp {
    pub entries: Vec<EntryResp>,
}

#[derive(Serialize, ToSchema)]
pub struct GetEntryResp {
    pub entry: EntryResp,
}

#[derive(Serialize, ToSchema)]
pub struct PostEntryResp {
    pub id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct EntryResp {
    pub id: i32,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl EntryResp {
    pub fn new(value: GalleryEntity, storage: &Storage) -> Self {
        Self {
            id: value.id,
            image_url: storage.public_url(&value.image_key),
            created_at: value.created_at,
        }
    }
}
