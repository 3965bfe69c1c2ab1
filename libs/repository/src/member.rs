use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct MemberRepository {
    db: DatabaseConnection,
}

impl MemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<member::Model> for MemberEntity {
    fn from(value: member::Model) -> Self {
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
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<MemberEntity> for member::ActiveModel {
    fn from(value: MemberEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            english_name: ActiveValue::Set(value.english_name),
            korean_name: ActiveValue::Set(value.korean_name),
            contact: ActiveValue::Set(value.contact),
            email: ActiveValue::Set(value.email),
            street: ActiveValue::Set(value.street),
            suburb: ActiveValue::Set(value.suburb),
            birthday: ActiveValue::Set(value.birthday),
            children: ActiveValue::Set(value.children),
            position: ActiveValue::Set(value.position),
            vehicle: ActiveValue::Set(value.vehicle),
            attendance: ActiveValue::Set(value.attendance),
            message: ActiveValue::Set(value.message),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl MemberRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<MemberEntity>> {
        let members = Member::find()
            .order_by_desc(member::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(MemberEntity::from).collect())
    }

    /// Substring match across the roster's searchable columns, the same
    /// set the admin screen searches.
    pub async fn search(
        &self,
        term: &str,
    ) -> anyhow::Result<Vec<MemberEntity>> {
        let condition = Condition::any()
            .add(icontains(member::Column::EnglishName, term))
            .add(icontains(member::Column::KoreanName, term))
            .add(icontains(member::Column::Contact, term))
            .add(icontains(member::Column::Email, term))
            .add(icontains(member::Column::Suburb, term));

        let members = Member::find()
            .filter(condition)
            .order_by_desc(member::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(MemberEntity::from).collect())
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<MemberEntity>> {
        let member = Member::find()
            .filter(member::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(member.map(MemberEntity::from))
    }

    pub async fn save(&self, member: MemberEntity) -> anyhow::Result<i32> {
        let member =
            Member::insert(member::ActiveModel::from(member))
                .exec(&self.db)
                .await?;

        Ok(member.last_insert_id)
    }
}

fn icontains(column: member::Column, term: &str) -> SimpleExpr {
    let pattern =
        format!("%{}%", crate::escape_like(&term.to_lowercase()));

    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(pattern).escape('\\'))
}
