use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GetCategoriesResp {
    pub categories: Vec<CategoryResp>,
}

#[derive(Serialize, ToSchema)]
pub struct PostCategoryResp {
    pub id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryResp {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl From<CategoryEntity> for CategoryResp {
    fn from(value: CategoryEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
        }
    }
}
