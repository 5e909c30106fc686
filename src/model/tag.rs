use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpsertTagDto {
    pub label: String,
}

/// Furniture model as listed under a tag.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagModelDto {
    pub id: i32,
    pub name: String,
    pub category: String,
}
