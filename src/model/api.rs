use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Greeting returned by the public API root.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Body of the association-replacement PUT endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IdsDto {
    pub ids: Vec<i32>,
}
