use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static API_TAG: &str = "api";

/// Public API root.
#[utoipa::path(
    get,
    path = "/api",
    tag = API_TAG,
    responses(
        (status = 200, description = "Greeting", body = MessageDto)
    )
)]
pub async fn welcome() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Bienvenue sur l'API de gestion des meubles".to_string(),
        }),
    )
}
