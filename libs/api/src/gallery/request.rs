use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PostEntryParam {
    pub file_name: String,
    /// Base64 encoded image contents
    pub data: String,
}
