use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        material::{CreateMaterialDto, MaterialDto, MaterialFilterParams, UpdateMaterialDto},
    },
    server::{
        controller::util::{
            auth::AuthUser,
            validate::{require_one_of, require_trimmed},
        },
        data::{company::CompanyRepository, material::MaterialRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static MATERIAL_TAG: &str = "materials";

pub const MATERIAL_TYPES: [&str; 3] = ["Bois", "Fer", "Plastique"];

fn to_dto(
    material: entity::material::Model,
    company: Option<entity::company::Model>,
) -> MaterialDto {
    MaterialDto {
        id: material.id,
        name: material.name,
        material_type: material.material_type,
        company_id: material.company_id,
        company: company.map(|c| c.name).unwrap_or_default(),
    }
}

/// List materials, optionally filtered by type and supplier
#[utoipa::path(
    get,
    path = "/api/private/materials",
    tag = MATERIAL_TAG,
    params(MaterialFilterParams),
    responses(
        (status = 200, description = "Materials with their supplier", body = Vec<MaterialDto>),
        (status = 400, description = "Unknown type filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn list_materials(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<MaterialFilterParams>,
) -> Result<impl IntoResponse, Error> {
    if let Some(material_type) = &params.material_type {
        require_one_of(material_type, &MATERIAL_TYPES, "type")?;
    }

    let materials = MaterialRepository::new(&state.db)
        .list(params.material_type.as_deref(), params.company_id)
        .await?;

    let dtos: Vec<MaterialDto> = materials
        .into_iter()
        .map(|(material, company)| to_dto(material, company))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one material with its supplier
#[utoipa::path(
    get,
    path = "/api/private/materials/{id}",
    tag = MATERIAL_TAG,
    params(("id" = i32, Path, description = "Material id")),
    responses(
        (status = 200, description = "The material", body = MaterialDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Material not found", body = ErrorDto)
    )
)]
pub async fn get_material(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some((material, company)) = MaterialRepository::new(&state.db).get(id).await? else {
        return Err(Error::NotFound("material"));
    };

    Ok((StatusCode::OK, Json(to_dto(material, company))))
}

/// Create a material
#[utoipa::path(
    post,
    path = "/api/private/materials",
    tag = MATERIAL_TAG,
    request_body = CreateMaterialDto,
    responses(
        (status = 201, description = "Material created", body = MaterialDto),
        (status = 400, description = "Missing name, unknown type, or unknown company", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 409, description = "Material already exists for this supplier", body = ErrorDto)
    )
)]
pub async fn create_material(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(body): Json<CreateMaterialDto>,
) -> Result<impl IntoResponse, Error> {
    let name = require_trimmed(&body.name, "name")?;
    require_one_of(&body.material_type, &MATERIAL_TYPES, "type")?;

    if !CompanyRepository::new(&state.db).exists(body.company_id).await? {
        return Err(Error::InvalidReference("company_id"));
    }

    let material = MaterialRepository::new(&state.db)
        .create(name, body.material_type, body.company_id)
        .await?;

    let Some((material, company)) = MaterialRepository::new(&state.db).get(material.id).await?
    else {
        return Err(Error::NotFound("material"));
    };

    Ok((StatusCode::CREATED, Json(to_dto(material, company))))
}

/// Update a material
#[utoipa::path(
    put,
    path = "/api/private/materials/{id}",
    tag = MATERIAL_TAG,
    params(("id" = i32, Path, description = "Material id")),
    request_body = UpdateMaterialDto,
    responses(
        (status = 200, description = "Material updated", body = MaterialDto),
        (status = 400, description = "Nothing to update, unknown type, or unknown company", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Material not found", body = ErrorDto),
        (status = 409, description = "Material already exists for this supplier", body = ErrorDto)
    )
)]
pub async fn update_material(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateMaterialDto>,
) -> Result<impl IntoResponse, Error> {
    let name = match &body.name {
        Some(name) => Some(require_trimmed(name, "name")?),
        None => None,
    };

    if let Some(material_type) = &body.material_type {
        require_one_of(material_type, &MATERIAL_TYPES, "type")?;
    }

    if name.is_none() && body.material_type.is_none() && body.company_id.is_none() {
        return Err(Error::Validation("nothing to update".to_string()));
    }

    if let Some(company_id) = body.company_id {
        if !CompanyRepository::new(&state.db).exists(company_id).await? {
            return Err(Error::InvalidReference("company_id"));
        }
    }

    let Some(material) = MaterialRepository::new(&state.db)
        .update(id, name, body.material_type, body.company_id)
        .await?
    else {
        return Err(Error::NotFound("material"));
    };

    let Some((material, company)) = MaterialRepository::new(&state.db).get(material.id).await?
    else {
        return Err(Error::NotFound("material"));
    };

    Ok((StatusCode::OK, Json(to_dto(material, company))))
}

/// Delete a material
#[utoipa::path(
    delete,
    path = "/api/private/materials/{id}",
    tag = MATERIAL_TAG,
    params(("id" = i32, Path, description = "Material id")),
    responses(
        (status = 204, description = "Material deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Material not found", body = ErrorDto)
    )
)]
pub async fn delete_material(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !MaterialRepository::new(&state.db).delete(id).await? {
        return Err(Error::NotFound("material"));
    }

    Ok(StatusCode::NO_CONTENT)
}
