use atelier::{
    model::company::UpsertCompanyDto,
    server::controller::companies::{create_company, delete_company, update_company},
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
async fn test_create_company_returns_created() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = create_company(
        State(state),
        demo_user(),
        Json(UpsertCompanyDto {
            name: "Acme".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn test_create_company_with_blank_name_is_rejected() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = create_company(
        State(state),
        demo_user(),
        Json(UpsertCompanyDto {
            name: "   ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_create_duplicate_company_conflicts() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    fixtures::seed_company(&test.db, "Acme").await?;

    let result = create_company(
        State(state),
        demo_user(),
        Json(UpsertCompanyDto {
            name: "Acme".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn test_update_missing_company_is_not_found() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let result = update_company(
        State(state),
        demo_user(),
        Path(42),
        Json(UpsertCompanyDto {
            name: "Acme".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_delete_company_returns_no_content() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let company = fixtures::seed_company(&test.db, "Acme").await?;

    let result = delete_company(State(state), demo_user(), Path(company.id)).await;

    assert!(result.is_ok());

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
async fn test_delete_referenced_company_conflicts() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);

    let company = fixtures::seed_company(&test.db, "Acme").await?;
    fixtures::seed_material(&test.db, "Oak Plank", "Bois", company.id).await?;

    let result = delete_company(State(state), demo_user(), Path(company.id)).await;

    assert!(result.is_err());

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
