use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Material joined with its supplier's name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MaterialDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub company_id: i32,
    pub company: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMaterialDto {
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub company_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMaterialDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub material_type: Option<String>,
    pub company_id: Option<i32>,
}

/// Optional list filters carried as query parameters.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct MaterialFilterParams {
    #[serde(rename = "type")]
    pub material_type: Option<String>,
    pub company_id: Option<i32>,
}
