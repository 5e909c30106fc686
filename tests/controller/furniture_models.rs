use atelier::{
    model::api::IdsDto,
    server::{
        controller::furniture_models::put_furniture_model_tags,
        service::associations::AssociationService,
    },
};
use atelier_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::util::{app_state, demo_user};

#[tokio::test]
async fn test_put_tags_replaces_the_whole_set() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let category = fixtures::seed_category(&test.db, "Table").await?;
    let model = fixtures::seed_furniture_model(&test.db, "Classic Table", category.id).await?;
    let rustic = fixtures::seed_tag(&test.db, "rustique").await?;
    let modern = fixtures::seed_tag(&test.db, "moderne").await?;

    let result = put_furniture_model_tags(
        State(state.clone()),
        demo_user(),
        Path(model.id),
        Json(IdsDto {
            ids: vec![rustic.id, modern.id],
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = put_furniture_model_tags(
        State(state),
        demo_user(),
        Path(model.id),
        Json(IdsDto {
            ids: vec![modern.id],
        }),
    )
    .await;

    assert!(result.is_ok());

    let tags = AssociationService::new(&test.db)
        .model_tags(model.id)
        .await
        .unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].id, modern.id);

    Ok(())
}

#[tokio::test]
async fn test_put_tags_on_missing_model_is_not_found() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = put_furniture_model_tags(
        State(state),
        demo_user(),
        Path(42),
        Json(IdsDto { ids: vec![] }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_put_tags_with_unknown_tag_is_rejected() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let category = fixtures::seed_category(&test.db, "Table").await?;
    let model = fixtures::seed_furniture_model(&test.db, "Classic Table", category.id).await?;

    let result = put_furniture_model_tags(
        State(state),
        demo_user(),
        Path(model.id),
        Json(IdsDto { ids: vec![999] }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
