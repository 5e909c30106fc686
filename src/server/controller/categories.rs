use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, UpsertCategoryDto},
    },
    server::{
        controller::util::{auth::AuthUser, validate::require_trimmed},
        data::category::CategoryRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static CATEGORY_TAG: &str = "categories";

fn to_dto(category: entity::category::Model) -> CategoryDto {
    CategoryDto {
        id: category.id,
        name: category.name,
    }
}

/// List categories ordered by name
#[utoipa::path(
    get,
    path = "/api/private/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let categories = CategoryRepository::new(&state.db).list().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/private/categories",
    tag = CATEGORY_TAG,
    request_body = UpsertCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(body): Json<UpsertCategoryDto>,
) -> Result<impl IntoResponse, Error> {
    let name = require_trimmed(&body.name, "name")?;

    let category = CategoryRepository::new(&state.db).create(name).await?;

    Ok((StatusCode::CREATED, Json(to_dto(category))))
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/api/private/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpsertCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpsertCategoryDto>,
) -> Result<impl IntoResponse, Error> {
    let name = require_trimmed(&body.name, "name")?;

    let Some(category) = CategoryRepository::new(&state.db).update(id, name).await? else {
        return Err(Error::NotFound("category"));
    };

    Ok((StatusCode::OK, Json(to_dto(category))))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/private/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category still referenced by models", body = ErrorDto)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !CategoryRepository::new(&state.db).delete(id).await? {
        return Err(Error::NotFound("category"));
    }

    Ok(StatusCode::NO_CONTENT)
}
