use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PostCommentParam {
    pub content: String,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchCommentParam {
    pub content: String,
}
