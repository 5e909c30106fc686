use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto, UserDto},
    },
    server::{error::Error, model::app::AppState},
};

pub static AUTH_TAG: &str = "auth";

// Single demo credential; a real identity store is expected to replace
// this check.
const DEMO_EMAIL: &str = "demo@meubles.fr";
const DEMO_PASSWORD: &str = "1234";

/// Exchange the demo credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = LoginResponseDto),
        (status = 401, description = "Credentials do not match", body = ErrorDto)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    if body.email != DEMO_EMAIL || body.password != DEMO_PASSWORD {
        return Err(Error::Unauthorized);
    }

    let token = state.auth.issue(&body.email)?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: UserDto { email: body.email },
        }),
    ))
}
