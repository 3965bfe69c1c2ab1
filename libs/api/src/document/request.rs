use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema, IntoParams)]
pub struct GetDocumentsParam {
    /// "bulletin", "pdf" or "music"
    pub kind: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PostDocumentParam {
    pub kind: String,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub file_name: String,
    /// Base64 encoded file contents
    pub data: String,
}
