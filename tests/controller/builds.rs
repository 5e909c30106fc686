use atelier::{
    model::build::{AddBuildMaterialDto, CreateBuildDto},
    server::controller::builds::{
        add_build_material, create_build, get_build, remove_build_material,
    },
};
use atelier_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;

use crate::util::{app_state, demo_user};

async fn seed(db: &DatabaseConnection) -> Result<(i32, i32), TestError> {
    let company = fixtures::seed_company(db, "Acme").await?;
    let category = fixtures::seed_category(db, "Table").await?;
    let material = fixtures::seed_material(db, "Oak Plank", "Bois", company.id).await?;
    let model = fixtures::seed_furniture_model(db, "Classic Table", category.id).await?;
    let build = fixtures::seed_build(db, model.id).await?;

    Ok((build.id, material.id))
}

#[tokio::test]
async fn test_create_build_with_unknown_model_is_rejected() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = create_build(
        State(state),
        demo_user(),
        Json(CreateBuildDto {
            furniture_model_id: 42,
            reference: None,
            date_creation: None,
            destination: None,
            notes: None,
        }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_get_missing_build_is_not_found() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = get_build(State(state), demo_user(), Path(42)).await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_add_build_material_returns_created() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let (build_id, material_id) = seed(&test.db).await?;

    let result = add_build_material(
        State(state),
        demo_user(),
        Path(build_id),
        Json(AddBuildMaterialDto {
            material_id,
            quantity: 5.0,
            unit: "u".to_string(),
            cost_unit: 2.0,
        }),
    )
    .await;

    assert!(result.is_ok());

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn test_add_build_material_with_unknown_material_is_rejected() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let (build_id, _) = seed(&test.db).await?;

    let result = add_build_material(
        State(state),
        demo_user(),
        Path(build_id),
        Json(AddBuildMaterialDto {
            material_id: 999,
            quantity: 5.0,
            unit: "u".to_string(),
            cost_unit: 2.0,
        }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_add_build_material_with_invalid_unit_is_rejected() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let (build_id, material_id) = seed(&test.db).await?;

    let result = add_build_material(
        State(state),
        demo_user(),
        Path(build_id),
        Json(AddBuildMaterialDto {
            material_id,
            quantity: 5.0,
            unit: "tonne".to_string(),
            cost_unit: 2.0,
        }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_remove_absent_pair_returns_no_content() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let (build_id, material_id) = seed(&test.db).await?;

    let result = remove_build_material(
        State(state),
        demo_user(),
        Path((build_id, material_id)),
    )
    .await;

    assert!(result.is_ok());

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
async fn test_remove_material_from_missing_build_is_not_found() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = remove_build_material(State(state), demo_user(), Path((42, 1))).await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
