use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        build::{
            AddBuildMaterialDto, BuildDetailDto, BuildDto, BuildFilterParams,
            BuildMaterialDto, CreateBuildDto, UpdateBuildDto,
        },
    },
    server::{
        controller::util::{auth::AuthUser, validate::require_one_of},
        data::{build::BuildRepository, furniture_model::FurnitureModelRepository},
        error::Error,
        model::app::AppState,
        service::build_materials::BuildMaterialService,
    },
};

pub static BUILD_TAG: &str = "builds";

pub const UNITS: [&str; 4] = ["u", "m", "m2", "kg"];

fn material_dtos(
    rows: Vec<crate::server::data::build_material::BuildMaterialRow>,
) -> Vec<BuildMaterialDto> {
    rows.into_iter()
        .map(|row| BuildMaterialDto {
            id: row.id,
            name: row.name,
            material_type: row.material_type,
            company_id: row.company_id,
            quantity: row.quantity,
            unit: row.unit,
            cost_unit: row.cost_unit,
        })
        .collect()
}

/// List fabrications, most recent first
#[utoipa::path(
    get,
    path = "/api/private/builds",
    tag = BUILD_TAG,
    params(BuildFilterParams),
    responses(
        (status = 200, description = "Builds with their model's name", body = Vec<BuildDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn list_builds(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<BuildFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let builds = BuildRepository::new(&state.db).list(params.model_id).await?;

    let dtos: Vec<BuildDto> = builds
        .into_iter()
        .map(|(build, model)| BuildDto {
            id: build.id,
            furniture_model_id: build.furniture_model_id,
            reference: build.reference,
            date_creation: build.date_creation,
            destination: build.destination,
            notes: build.notes,
            model_name: model.map(|m| m.name).unwrap_or_default(),
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Build detail with its material list
#[utoipa::path(
    get,
    path = "/api/private/builds/{id}",
    tag = BUILD_TAG,
    params(("id" = i32, Path, description = "Build id")),
    responses(
        (status = 200, description = "The build with its materials", body = BuildDetailDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Build not found", body = ErrorDto)
    )
)]
pub async fn get_build(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let detail = BuildMaterialService::new(&state.db).detail(id).await?;

    let dto = BuildDetailDto {
        id: detail.build.id,
        furniture_model_id: detail.build.furniture_model_id,
        reference: detail.build.reference,
        date_creation: detail.build.date_creation,
        destination: detail.build.destination,
        notes: detail.build.notes,
        model_name: detail.build.model_name,
        category_id: detail.build.category_id,
        category_name: detail.build.category_name,
        materials: material_dtos(detail.materials),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Record a new fabrication
#[utoipa::path(
    post,
    path = "/api/private/builds",
    tag = BUILD_TAG,
    request_body = CreateBuildDto,
    responses(
        (status = 201, description = "Build created", body = BuildDto),
        (status = 400, description = "Unknown furniture model", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn create_build(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(body): Json<CreateBuildDto>,
) -> Result<impl IntoResponse, Error> {
    let Some((model, _)) = FurnitureModelRepository::new(&state.db)
        .get(body.furniture_model_id)
        .await?
    else {
        return Err(Error::InvalidReference("furniture_model_id"));
    };

    let build = BuildRepository::new(&state.db)
        .create(
            body.furniture_model_id,
            body.reference,
            body.date_creation,
            body.destination,
            body.notes,
        )
        .await?;

    let dto = BuildDto {
        id: build.id,
        furniture_model_id: build.furniture_model_id,
        reference: build.reference,
        date_creation: build.date_creation,
        destination: build.destination,
        notes: build.notes,
        model_name: model.name,
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Update a fabrication
#[utoipa::path(
    put,
    path = "/api/private/builds/{id}",
    tag = BUILD_TAG,
    params(("id" = i32, Path, description = "Build id")),
    request_body = UpdateBuildDto,
    responses(
        (status = 200, description = "Build updated", body = BuildDto),
        (status = 400, description = "Unknown furniture model", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Build not found", body = ErrorDto)
    )
)]
pub async fn update_build(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateBuildDto>,
) -> Result<impl IntoResponse, Error> {
    if let Some(furniture_model_id) = body.furniture_model_id {
        if !FurnitureModelRepository::new(&state.db)
            .exists(furniture_model_id)
            .await?
        {
            return Err(Error::InvalidReference("furniture_model_id"));
        }
    }

    let repository = BuildRepository::new(&state.db);

    let updated = repository
        .update(
            id,
            body.furniture_model_id,
            body.reference.map(Some),
            body.date_creation.map(Some),
            body.destination.map(Some),
            body.notes.map(Some),
        )
        .await?;

    if updated.is_none() {
        return Err(Error::NotFound("build"));
    }

    let Some(row) = repository.get_detail(id).await? else {
        return Err(Error::NotFound("build"));
    };

    let dto = BuildDto {
        id: row.id,
        furniture_model_id: row.furniture_model_id,
        reference: row.reference,
        date_creation: row.date_creation,
        destination: row.destination,
        notes: row.notes,
        model_name: row.model_name,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Delete a fabrication and its material rows
#[utoipa::path(
    delete,
    path = "/api/private/builds/{id}",
    tag = BUILD_TAG,
    params(("id" = i32, Path, description = "Build id")),
    responses(
        (status = 204, description = "Build deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Build not found", body = ErrorDto)
    )
)]
pub async fn delete_build(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !BuildRepository::new(&state.db).delete(id).await? {
        return Err(Error::NotFound("build"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Materials consumed by a build
#[utoipa::path(
    get,
    path = "/api/private/builds/{id}/materials",
    tag = BUILD_TAG,
    params(("id" = i32, Path, description = "Build id")),
    responses(
        (status = 200, description = "Materials of the build", body = Vec<BuildMaterialDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Build not found", body = ErrorDto)
    )
)]
pub async fn list_build_materials(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let rows = BuildMaterialService::new(&state.db).list(id).await?;

    Ok((StatusCode::OK, Json(material_dtos(rows))))
}

/// Add a material to a build, or update its quantity if already present
#[utoipa::path(
    post,
    path = "/api/private/builds/{id}/materials",
    tag = BUILD_TAG,
    params(("id" = i32, Path, description = "Build id")),
    request_body = AddBuildMaterialDto,
    responses(
        (status = 201, description = "Material recorded for the build", body = BuildMaterialDto),
        (status = 400, description = "Unknown material or invalid unit", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Build not found", body = ErrorDto)
    )
)]
pub async fn add_build_material(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<AddBuildMaterialDto>,
) -> Result<impl IntoResponse, Error> {
    require_one_of(&body.unit, &UNITS, "unit")?;

    let service = BuildMaterialService::new(&state.db);

    service
        .add_or_update(id, body.material_id, body.quantity, body.unit, body.cost_unit)
        .await?;

    // Echo the stored row joined with the material's fields.
    let rows = service.list(id).await?;
    let row = rows
        .into_iter()
        .find(|row| row.id == body.material_id)
        .ok_or(Error::NotFound("build material"))?;

    let dto = BuildMaterialDto {
        id: row.id,
        name: row.name,
        material_type: row.material_type,
        company_id: row.company_id,
        quantity: row.quantity,
        unit: row.unit,
        cost_unit: row.cost_unit,
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Remove a material from a build; removing an absent pair is a no-op
#[utoipa::path(
    delete,
    path = "/api/private/builds/{id}/materials/{material_id}",
    tag = BUILD_TAG,
    params(
        ("id" = i32, Path, description = "Build id"),
        ("material_id" = i32, Path, description = "Material id")
    ),
    responses(
        (status = 204, description = "Pair removed or already absent"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Build not found", body = ErrorDto)
    )
)]
pub async fn remove_build_material(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((id, material_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    BuildMaterialService::new(&state.db)
        .remove(id, material_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
