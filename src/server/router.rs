//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here with their utoipa specifications,
//! collected into a single OpenAPI document, and Swagger UI is served at
//! `/api/docs` for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's router with every API endpoint and the
/// Swagger UI. Only `/api` and `/api/auth/login` are public; everything
/// under `/api/private` requires a bearer token.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Atelier",
            description = "Administrative API for tracking furniture manufacturing"
        ),
        tags(
            (name = controller::api::API_TAG, description = "Public API root"),
            (name = controller::auth::AUTH_TAG, description = "Authentication"),
            (name = controller::companies::COMPANY_TAG, description = "Supplier catalog"),
            (name = controller::categories::CATEGORY_TAG, description = "Category catalog"),
            (name = controller::materials::MATERIAL_TAG, description = "Material catalog"),
            (name = controller::furniture_models::MODEL_TAG, description = "Furniture model catalog"),
            (name = controller::tags::TAG_TAG, description = "Tags and their associations"),
            (name = controller::builds::BUILD_TAG, description = "Fabrications and consumed materials"),
            (name = controller::stats::STATS_TAG, description = "Dashboard aggregates"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::api::welcome))
        .routes(routes!(controller::auth::login))
        .routes(routes!(
            controller::companies::list_companies,
            controller::companies::create_company
        ))
        .routes(routes!(
            controller::companies::update_company,
            controller::companies::delete_company
        ))
        .routes(routes!(
            controller::categories::list_categories,
            controller::categories::create_category
        ))
        .routes(routes!(
            controller::categories::update_category,
            controller::categories::delete_category
        ))
        .routes(routes!(
            controller::materials::list_materials,
            controller::materials::create_material
        ))
        .routes(routes!(
            controller::materials::get_material,
            controller::materials::update_material,
            controller::materials::delete_material
        ))
        .routes(routes!(
            controller::furniture_models::list_furniture_models,
            controller::furniture_models::create_furniture_model
        ))
        .routes(routes!(
            controller::furniture_models::get_furniture_model,
            controller::furniture_models::update_furniture_model,
            controller::furniture_models::delete_furniture_model
        ))
        .routes(routes!(
            controller::furniture_models::get_furniture_model_tags,
            controller::furniture_models::put_furniture_model_tags
        ))
        .routes(routes!(
            controller::tags::list_tags,
            controller::tags::create_tag
        ))
        .routes(routes!(
            controller::tags::update_tag,
            controller::tags::delete_tag
        ))
        .routes(routes!(controller::tags::get_tag_models))
        .routes(routes!(
            controller::tags::get_tag_materials,
            controller::tags::put_tag_materials
        ))
        .routes(routes!(
            controller::builds::list_builds,
            controller::builds::create_build
        ))
        .routes(routes!(
            controller::builds::get_build,
            controller::builds::update_build,
            controller::builds::delete_build
        ))
        .routes(routes!(
            controller::builds::list_build_materials,
            controller::builds::add_build_material
        ))
        .routes(routes!(controller::builds::remove_build_material))
        .routes(routes!(controller::stats::global_stats))
        .routes(routes!(controller::stats::top_materials))
        .routes(routes!(controller::stats::company_stats))
        .routes(routes!(controller::stats::category_stats))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
