use chrono::{DateTime, NaiveDate, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GetMembersResp {
    pub members: Vec<MemberResp>,
}

#[derive(Serialize, ToSchema)]
pub struct PostMemberResp {
    pub id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct MemberResp {
    pub id: i32,
    pub english_name: String,
    pub korean_name: String,
    pub contact: String,
    pub email: String,
    pub street: String,
    pub suburb: String,
    pub birthday: Option<NaiveDate>,
    pub children: String,
    pub position: String,
    pub vehicle: bool,
    pub attendance: bool,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MemberEntity> for MemberResp {
    fn from(value: MemberEntity) -> Self {
        Self {
            id: value.id,
            english_name: value.english_name,
            korean_name: value.korean_name,
            contact: value.contact,
            email: value.email,
            street: value.street,
            suburb: value.suburb,
            birthday: value.birthday,
            children: value.children,
            position: value.position,
            vehicle: value.vehicle,
            attendance: value.attendance,
            message: value.message,
            created_at: value.created_at,
        }
    }
}
