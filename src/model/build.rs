use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Build row joined with its model's name, as returned by the list
/// endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BuildDto {
    pub id: i32,
    pub furniture_model_id: i32,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub date_creation: Option<NaiveDate>,
    pub destination: Option<String>,
    pub notes: Option<String>,
    pub model_name: String,
}

/// Build detail: own fields, owning model and category, and the full
/// material list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BuildDetailDto {
    pub id: i32,
    pub furniture_model_id: i32,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub date_creation: Option<NaiveDate>,
    pub destination: Option<String>,
    pub notes: Option<String>,
    pub model_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub materials: Vec<BuildMaterialDto>,
}

/// One material consumed by a build; `id` is the material id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BuildMaterialDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub company_id: i32,
    pub quantity: f64,
    pub unit: String,
    pub cost_unit: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBuildDto {
    pub furniture_model_id: i32,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub date_creation: Option<NaiveDate>,
    pub destination: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateBuildDto {
    pub furniture_model_id: Option<i32>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub date_creation: Option<NaiveDate>,
    pub destination: Option<String>,
    pub notes: Option<String>,
}

/// Body of the build-material upsert endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddBuildMaterialDto {
    pub material_id: i32,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub cost_unit: f64,
}

fn default_unit() -> String {
    "u".to_string()
}

/// Optional list filter carried as a query parameter.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct BuildFilterParams {
    pub model_id: Option<i32>,
}
