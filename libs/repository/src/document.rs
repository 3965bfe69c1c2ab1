use chrono::{DateTime, Utc};
use sea_orm::strum::IntoEnumIterator as _;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use strum::IntoEnumIterator as _;

use crate::active_models::{prelude::*, *};
use entity::document::Kind;
use entity::prelude::*;

use self::sea_orm_active_enums::DocumentKind;

#[derive(Clone, Debug)]
pub struct DocumentRepository {
    db: DatabaseConnection,
}

impl DocumentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<document::Model> for DocumentEntity {
    fn from(value: document::Model) -> Self {
        Self {
            id: value.id,
            kind: value.kind.into(),
            title: value.title,
            date: value.date,
            file_key: value.file_key,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<DocumentEntity> for document::ActiveModel {
    fn from(value: DocumentEntity) -> Self {
        let kind: DocumentKind = value.kind.into();
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            kind: ActiveValue::Set(kind),
            title: ActiveValue::Set(value.title),
            date: ActiveValue::Set(value.date),
            file_key: ActiveValue::Set(value.file_key),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl DocumentRepository {
    pub async fn find_all(
        &self,
        kind: Option<Kind>,
    ) -> anyhow::Result<Vec<DocumentEntity>> {
        let mut query =
            Document::find().order_by_desc(document::Column::CreatedAt);

        if let Some(kind) = kind {
            let kind: DocumentKind = kind.into();
            query = query.filter(document::Column::Kind.eq(kind));
        }

        let documents = query.all(&self.db).await?;

        Ok(documents.into_iter().map(DocumentEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<DocumentEntity>> {
        let document = Document::find_by_id(id).one(&self.db).await?;

        Ok(document.map(DocumentEntity::from))
    }

    pub async fn save(
        &self,
        document: DocumentEntity,
    ) -> anyhow::Result<i32> {
        let document =
            Document::insert(document::ActiveModel::from(document))
                .exec(&self.db)
                .await?;

        Ok(document.last_insert_id)
    }
}

macro_rules! impl_from {
    ($from:ty, $to:ty) => {
        impl From<$from> for $to {
            fn from(value: $from) -> Self {
                <$to>::iter()
                    .find(|x| (x.clone() as usize) == (value.clone() as usize))
                    .unwrap()
            }
        }

        impl From<$to> for $from {
            fn from(value: $to) -> Self {
                <$from>::iter()
                    .find(|x| (x.clone() as usize) == (value.clone() as usize))
                    .unwrap()
            }
        }
    };
}

impl_from!(entity::document::Kind, sea_orm_active_enums::DocumentKind);
