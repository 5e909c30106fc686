use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{error::Error, model::app::AppState};

/// Identity attached to every private request, extracted from the
/// `Authorization: Bearer` header. Rejection maps to 401.
pub struct AuthUser {
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(Error::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(Error::Unauthorized)?;

        let claims = state.auth.verify(token)?;

        Ok(AuthUser { email: claims.sub })
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::FromRequestParts, http::Request};
    use sea_orm::Database;

    use crate::server::model::{app::AppState, auth::AuthKeys};

    use super::AuthUser;

    async fn state() -> AppState {
        AppState {
            db: Database::connect("sqlite::memory:").await.unwrap(),
            auth: AuthKeys::from_secret(b"test-secret"),
        }
    }

    #[tokio::test]
    async fn test_valid_bearer_token_is_accepted() {
        let state = state().await;
        let token = state.auth.issue("demo@meubles.fr").unwrap();

        let request = Request::builder()
            .header("Authorization", format!("Bearer {}", token))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let user = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(user.email, "demo@meubles.fr");
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let state = state().await;

        let request = Request::builder().body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &state).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let state = state().await;

        let request = Request::builder()
            .header("Authorization", "Bearer not-a-token")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &state).await;

        assert!(result.is_err());
    }
}
