use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdsDto},
        material::MaterialDto,
        tag::{TagDto, TagModelDto, UpsertTagDto},
    },
    server::{
        controller::util::{auth::AuthUser, validate::require_trimmed},
        data::tag::TagRepository,
        error::Error,
        model::app::AppState,
        service::associations::AssociationService,
    },
};

pub static TAG_TAG: &str = "tags";

fn to_dto(tag: entity::tag::Model) -> TagDto {
    TagDto {
        id: tag.id,
        label: tag.label,
    }
}

fn material_dtos(
    materials: Vec<(entity::material::Model, Option<entity::company::Model>)>,
) -> Vec<MaterialDto> {
    materials
        .into_iter()
        .map(|(material, company)| MaterialDto {
            id: material.id,
            name: material.name,
            material_type: material.material_type,
            company_id: material.company_id,
            company: company.map(|c| c.name).unwrap_or_default(),
        })
        .collect()
}

/// List tags ordered by label
#[utoipa::path(
    get,
    path = "/api/private/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags", body = Vec<TagDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn list_tags(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let tags = TagRepository::new(&state.db).list().await?;

    let dtos: Vec<TagDto> = tags.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a tag
#[utoipa::path(
    post,
    path = "/api/private/tags",
    tag = TAG_TAG,
    request_body = UpsertTagDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Missing label", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 409, description = "Label already taken", body = ErrorDto)
    )
)]
pub async fn create_tag(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(body): Json<UpsertTagDto>,
) -> Result<impl IntoResponse, Error> {
    let label = require_trimmed(&body.label, "label")?;

    let tag = TagRepository::new(&state.db).create(label).await?;

    Ok((StatusCode::CREATED, Json(to_dto(tag))))
}

/// Rename a tag
#[utoipa::path(
    put,
    path = "/api/private/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    request_body = UpsertTagDto,
    responses(
        (status = 200, description = "Tag updated", body = TagDto),
        (status = 400, description = "Missing label", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 409, description = "Label already taken", body = ErrorDto)
    )
)]
pub async fn update_tag(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpsertTagDto>,
) -> Result<impl IntoResponse, Error> {
    let label = require_trimmed(&body.label, "label")?;

    let Some(tag) = TagRepository::new(&state.db).update(id, label).await? else {
        return Err(Error::NotFound("tag"));
    };

    Ok((StatusCode::OK, Json(to_dto(tag))))
}

/// Delete a tag and its associations
#[utoipa::path(
    delete,
    path = "/api/private/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto)
    )
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !TagRepository::new(&state.db).delete(id).await? {
        return Err(Error::NotFound("tag"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Furniture models carrying a tag
#[utoipa::path(
    get,
    path = "/api/private/tags/{id}/models",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Models carrying the tag", body = Vec<TagModelDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto)
    )
)]
pub async fn get_tag_models(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let rows = AssociationService::new(&state.db).tag_models(id).await?;

    let dtos: Vec<TagModelDto> = rows
        .into_iter()
        .map(|row| TagModelDto {
            id: row.id,
            name: row.name,
            category: row.category,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Materials associated with a tag
#[utoipa::path(
    get,
    path = "/api/private/tags/{id}/materials",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Materials associated with the tag", body = Vec<MaterialDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto)
    )
)]
pub async fn get_tag_materials(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let materials = AssociationService::new(&state.db).tag_materials(id).await?;

    Ok((StatusCode::OK, Json(material_dtos(materials))))
}

/// Replace the material set of a tag
#[utoipa::path(
    put,
    path = "/api/private/tags/{id}/materials",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    request_body = IdsDto,
    responses(
        (status = 200, description = "New material set of the tag", body = Vec<MaterialDto>),
        (status = 400, description = "A material id does not exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto)
    )
)]
pub async fn put_tag_materials(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<IdsDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AssociationService::new(&state.db);

    service.replace_tag_materials(id, &body.ids).await?;

    let materials = service.tag_materials(id).await?;

    Ok((StatusCode::OK, Json(material_dtos(materials))))
}
