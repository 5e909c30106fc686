use atelier::{
    model::stats::TopMaterialsParams,
    server::controller::stats::{global_stats, top_materials},
};
use atelier_test_utils::prelude::*;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::util::{app_state, demo_user};

#[tokio::test]
async fn test_global_stats_on_empty_store() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = global_stats(State(state), demo_user()).await;

    assert!(result.is_ok());

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_top_materials_accepts_limit_override() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = top_materials(
        State(state),
        demo_user(),
        Query(TopMaterialsParams { limit: Some(3) }),
    )
    .await;

    assert!(result.is_ok());

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
