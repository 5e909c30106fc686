use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        stats::{
            CategoryBuildCountDto, CompanyQuantityDto, GlobalCountsDto, TopMaterialDto,
            TopMaterialsParams,
        },
    },
    server::{
        controller::util::auth::AuthUser,
        error::Error,
        model::app::AppState,
        service::stats::{StatsService, DEFAULT_TOP_MATERIALS_LIMIT},
    },
};

pub static STATS_TAG: &str = "stats";

/// Entity counts for the dashboard header
#[utoipa::path(
    get,
    path = "/api/private/stats/global",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Scalar counts", body = GlobalCountsDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn global_stats(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let counts = StatsService::new(&state.db).global_counts().await?;

    Ok((
        StatusCode::OK,
        Json(GlobalCountsDto {
            models: counts.models,
            builds: counts.builds,
            materials: counts.materials,
            categories: counts.categories,
        }),
    ))
}

/// Most-consumed materials across all builds
#[utoipa::path(
    get,
    path = "/api/private/stats/materials/top",
    tag = STATS_TAG,
    params(TopMaterialsParams),
    responses(
        (status = 200, description = "Materials by summed quantity, descending", body = Vec<TopMaterialDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn top_materials(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<TopMaterialsParams>,
) -> Result<impl IntoResponse, Error> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_MATERIALS_LIMIT);

    let rows = StatsService::new(&state.db)
        .top_materials_by_quantity(limit)
        .await?;

    let dtos: Vec<TopMaterialDto> = rows
        .into_iter()
        .map(|row| TopMaterialDto {
            name: row.name,
            material_type: row.material_type,
            total_qty: row.total_qty,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Consumed quantities grouped by supplier
#[utoipa::path(
    get,
    path = "/api/private/stats/companies",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Quantities by company, descending", body = Vec<CompanyQuantityDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn company_stats(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let rows = StatsService::new(&state.db)
        .material_quantity_by_company()
        .await?;

    let dtos: Vec<CompanyQuantityDto> = rows
        .into_iter()
        .map(|row| CompanyQuantityDto {
            company: row.company,
            total_qty: row.total_qty,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Builds per category, including categories with none
#[utoipa::path(
    get,
    path = "/api/private/stats/categories",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Build counts by category, descending", body = Vec<CategoryBuildCountDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn category_stats(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let rows = StatsService::new(&state.db).build_count_by_category().await?;

    let dtos: Vec<CategoryBuildCountDto> = rows
        .into_iter()
        .map(|row| CategoryBuildCountDto {
            category: row.category,
            build_count: row.build_count,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
