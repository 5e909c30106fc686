//! End-to-end fabrication flow: catalog a supplier, material, category,
//! and model, then record a build and drive its material list through
//! the REST handlers.

use atelier::{
    model::build::AddBuildMaterialDto,
    server::{
        controller::builds::{add_build_material, delete_build, remove_build_material},
        service::build_materials::BuildMaterialService,
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
async fn test_full_build_material_lifecycle() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state = app_state(&test);
    let service = BuildMaterialService::new(&test.db);

    let acme = fixtures::seed_company(&test.db, "Acme").await?;
    let oak = fixtures::seed_material(&test.db, "Oak Plank", "Bois", acme.id).await?;
    let tables = fixtures::seed_category(&test.db, "Table").await?;
    let classic = fixtures::seed_furniture_model(&test.db, "Classic Table", tables.id).await?;
    let build = fixtures::seed_build(&test.db, classic.id).await?;

    // Add Oak Plank, 5 units at 2.0 each.
    let result = add_build_material(
        State(state.clone()),
        demo_user(),
        Path(build.id),
        Json(AddBuildMaterialDto {
            material_id: oak.id,
            quantity: 5.0,
            unit: "u".to_string(),
            cost_unit: 2.0,
        }),
    )
    .await;
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::CREATED
    );

    let detail = service.detail(build.id).await.unwrap();
    assert_eq!(detail.materials.len(), 1);
    assert_eq!(detail.materials[0].quantity, 5.0);

    // Re-adding the same material updates the row instead of adding one.
    let result = add_build_material(
        State(state.clone()),
        demo_user(),
        Path(build.id),
        Json(AddBuildMaterialDto {
            material_id: oak.id,
            quantity: 8.0,
            unit: "u".to_string(),
            cost_unit: 2.0,
        }),
    )
    .await;
    assert!(result.is_ok());

    let detail = service.detail(build.id).await.unwrap();
    assert_eq!(detail.materials.len(), 1);
    assert_eq!(detail.materials[0].quantity, 8.0);

    // Remove the material from the build.
    let result = remove_build_material(
        State(state.clone()),
        demo_user(),
        Path((build.id, oak.id)),
    )
    .await;
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    let detail = service.detail(build.id).await.unwrap();
    assert!(detail.materials.is_empty());

    // Delete the build; the detail lookup now misses.
    let result = delete_build(State(state), demo_user(), Path(build.id)).await;
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    let result = service.detail(build.id).await;
    assert!(result.is_err());

    Ok(())
}
