use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FurnitureModelDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub category_name: String,
}

/// List row carrying the derived number of builds for the model.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FurnitureModelListDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub category_name: String,
    pub builds_count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFurnitureModelDto {
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateFurnitureModelDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
}
