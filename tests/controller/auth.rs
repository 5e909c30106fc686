use atelier::{
    model::auth::{LoginDto, LoginResponseDto},
    server::controller::auth::login,
};
use atelier_test_utils::prelude::*;
use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::util::app_state;

#[tokio::test]
async fn test_login_with_demo_credentials_returns_a_valid_token() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = login(
        State(state.clone()),
        Json(LoginDto {
            email: "demo@meubles.fr".to_string(),
            password: "1234".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: LoginResponseDto = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body.user.email, "demo@meubles.fr");

    let claims = state.auth.verify(&body.token).unwrap();
    assert_eq!(claims.sub, "demo@meubles.fr");

    Ok(())
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = login(
        State(state),
        Json(LoginDto {
            email: "demo@meubles.fr".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
