use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PostCategoryParam {
    pub name: String,
    pub slug: Option<String>,
}
