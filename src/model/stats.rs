use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GlobalCountsDto {
    pub models: u64,
    pub builds: u64,
    pub materials: u64,
    pub categories: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopMaterialDto {
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub total_qty: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyQuantityDto {
    pub company: String,
    pub total_qty: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryBuildCountDto {
    pub category: String,
    pub build_count: i64,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct TopMaterialsParams {
    pub limit: Option<u64>,
}
