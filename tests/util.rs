use atelier::server::{
    controller::util::auth::AuthUser,
    model::{app::AppState, auth::AuthKeys},
};
use atelier_test_utils::TestSetup;

pub static TEST_JWT_SECRET: &[u8] = b"test-secret";

pub fn app_state(test: &TestSetup) -> AppState {
    AppState {
        db: test.db.clone(),
        auth: AuthKeys::from_secret(TEST_JWT_SECRET),
    }
}

pub fn demo_user() -> AuthUser {
    AuthUser {
        email: "demo@meubles.fr".to_string(),
    }
}
