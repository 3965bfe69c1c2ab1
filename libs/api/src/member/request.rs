use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema, IntoParams)]
pub struct GetMembersParam {
    pub search: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PostMemberParam {
    pub english_name: String,
    pub korean_name: String,
    pub email: String,
    pub contact: Option<String>,
    pub street: Option<String>,
    pub suburb: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub children: Option<String>,
    pub position: Option<String>,
    pub vehicle: Option<bool>,
    pub attendance: Option<bool>,
    pub message: Option<String>,
}
