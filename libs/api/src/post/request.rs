use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::serde_as;
use serde_with::DisplayFromStr;
use utoipa::{IntoParams, ToSchema};

#[serde_as]
#[derive(Deserialize, ToSchema, IntoParams)]
pub struct GetPostsParam {
    /// 1-based page number
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page: Option<u64>,
}

#[derive(Deserialize, ToSchema, IntoParams)]
pub struct SearchPostsParam {
    pub q: String,
    /// "all", "title", "content" or "name"
    pub field: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PostPostParam {
    pub title: String,
    pub content: String,
    pub date: Option<NaiveDate>,
    pub category_id: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchPostParam {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<NaiveDate>,
}
