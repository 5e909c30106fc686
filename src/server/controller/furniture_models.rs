use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdsDto},
        furniture_model::{
            CreateFurnitureModelDto, FurnitureModelDto, FurnitureModelListDto,
            UpdateFurnitureModelDto,
        },
        tag::TagDto,
    },
    server::{
        controller::util::{auth::AuthUser, validate::require_trimmed},
        data::{category::CategoryRepository, furniture_model::FurnitureModelRepository},
        error::Error,
        model::app::AppState,
        service::associations::AssociationService,
    },
};

pub static MODEL_TAG: &str = "furniture_models";

fn to_dto(
    model: entity::furniture_model::Model,
    category: Option<entity::category::Model>,
) -> FurnitureModelDto {
    let (category_id, category_name) = match category {
        Some(category) => (category.id, category.name),
        None => (model.category_id, String::new()),
    };

    FurnitureModelDto {
        id: model.id,
        name: model.name,
        description: model.description,
        category_id,
        category_name,
    }
}

/// List models with their category and number of builds
#[utoipa::path(
    get,
    path = "/api/private/furniture_models",
    tag = MODEL_TAG,
    responses(
        (status = 200, description = "All furniture models", body = Vec<FurnitureModelListDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn list_furniture_models(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let rows = FurnitureModelRepository::new(&state.db).list().await?;

    let dtos: Vec<FurnitureModelListDto> = rows
        .into_iter()
        .map(|row| FurnitureModelListDto {
            id: row.id,
            name: row.name,
            description: row.description,
            category_id: row.category_id,
            category_name: row.category_name,
            builds_count: row.builds_count,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one model with its category
#[utoipa::path(
    get,
    path = "/api/private/furniture_models/{id}",
    tag = MODEL_TAG,
    params(("id" = i32, Path, description = "Furniture model id")),
    responses(
        (status = 200, description = "The furniture model", body = FurnitureModelDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Model not found", body = ErrorDto)
    )
)]
pub async fn get_furniture_model(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some((model, category)) = FurnitureModelRepository::new(&state.db).get(id).await? else {
        return Err(Error::NotFound("furniture model"));
    };

    Ok((StatusCode::OK, Json(to_dto(model, category))))
}

/// Create a model
#[utoipa::path(
    post,
    path = "/api/private/furniture_models",
    tag = MODEL_TAG,
    request_body = CreateFurnitureModelDto,
    responses(
        (status = 201, description = "Model created", body = FurnitureModelDto),
        (status = 400, description = "Missing name or unknown category", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn create_furniture_model(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(body): Json<CreateFurnitureModelDto>,
) -> Result<impl IntoResponse, Error> {
    let name = require_trimmed(&body.name, "name")?;

    if !CategoryRepository::new(&state.db).exists(body.category_id).await? {
        return Err(Error::InvalidReference("category_id"));
    }

    let model = FurnitureModelRepository::new(&state.db)
        .create(name, body.description, body.category_id)
        .await?;

    let Some((model, category)) = FurnitureModelRepository::new(&state.db).get(model.id).await?
    else {
        return Err(Error::NotFound("furniture model"));
    };

    Ok((StatusCode::CREATED, Json(to_dto(model, category))))
}

/// Update a model
#[utoipa::path(
    put,
    path = "/api/private/furniture_models/{id}",
    tag = MODEL_TAG,
    params(("id" = i32, Path, description = "Furniture model id")),
    request_body = UpdateFurnitureModelDto,
    responses(
        (status = 200, description = "Model updated", body = FurnitureModelDto),
        (status = 400, description = "Blank name or unknown category", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Model not found", body = ErrorDto)
    )
)]
pub async fn update_furniture_model(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateFurnitureModelDto>,
) -> Result<impl IntoResponse, Error> {
    let name = match &body.name {
        Some(name) => Some(require_trimmed(name, "name")?),
        None => None,
    };

    if let Some(category_id) = body.category_id {
        if !CategoryRepository::new(&state.db).exists(category_id).await? {
            return Err(Error::InvalidReference("category_id"));
        }
    }

    let repository = FurnitureModelRepository::new(&state.db);

    let Some(model) = repository
        .update(id, name, body.description.map(Some), body.category_id)
        .await?
    else {
        return Err(Error::NotFound("furniture model"));
    };

    let Some((model, category)) = repository.get(model.id).await? else {
        return Err(Error::NotFound("furniture model"));
    };

    Ok((StatusCode::OK, Json(to_dto(model, category))))
}

/// Delete a model, cascading into its builds and tag links
#[utoipa::path(
    delete,
    path = "/api/private/furniture_models/{id}",
    tag = MODEL_TAG,
    params(("id" = i32, Path, description = "Furniture model id")),
    responses(
        (status = 204, description = "Model deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Model not found", body = ErrorDto)
    )
)]
pub async fn delete_furniture_model(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !FurnitureModelRepository::new(&state.db).delete(id).await? {
        return Err(Error::NotFound("furniture model"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Tags attached to a model
#[utoipa::path(
    get,
    path = "/api/private/furniture_models/{id}/tags",
    tag = MODEL_TAG,
    params(("id" = i32, Path, description = "Furniture model id")),
    responses(
        (status = 200, description = "Tags of the model", body = Vec<TagDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Model not found", body = ErrorDto)
    )
)]
pub async fn get_furniture_model_tags(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tags = AssociationService::new(&state.db).model_tags(id).await?;

    let dtos: Vec<TagDto> = tags
        .into_iter()
        .map(|tag| TagDto {
            id: tag.id,
            label: tag.label,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Replace the tag set of a model
#[utoipa::path(
    put,
    path = "/api/private/furniture_models/{id}/tags",
    tag = MODEL_TAG,
    params(("id" = i32, Path, description = "Furniture model id")),
    request_body = IdsDto,
    responses(
        (status = 200, description = "New tag set of the model", body = Vec<TagDto>),
        (status = 400, description = "A tag id does not exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Model not found", body = ErrorDto)
    )
)]
pub async fn put_furniture_model_tags(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<IdsDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AssociationService::new(&state.db);

    service.replace_model_tags(id, &body.ids).await?;

    let tags = service.model_tags(id).await?;

    let dtos: Vec<TagDto> = tags
        .into_iter()
        .map(|tag| TagDto {
            id: tag.id,
            label: tag.label,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
