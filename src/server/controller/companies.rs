use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        company::{CompanyDto, UpsertCompanyDto},
    },
    server::{
        controller::util::{auth::AuthUser, validate::require_trimmed},
        data::company::CompanyRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static COMPANY_TAG: &str = "companies";

fn to_dto(company: entity::company::Model) -> CompanyDto {
    CompanyDto {
        id: company.id,
        name: company.name,
    }
}

/// List suppliers ordered by name
#[utoipa::path(
    get,
    path = "/api/private/companies",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "All companies", body = Vec<CompanyDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto)
    )
)]
pub async fn list_companies(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let companies = CompanyRepository::new(&state.db).list().await?;

    let dtos: Vec<CompanyDto> = companies.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a supplier
#[utoipa::path(
    post,
    path = "/api/private/companies",
    tag = COMPANY_TAG,
    request_body = UpsertCompanyDto,
    responses(
        (status = 201, description = "Company created", body = CompanyDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(body): Json<UpsertCompanyDto>,
) -> Result<impl IntoResponse, Error> {
    let name = require_trimmed(&body.name, "name")?;

    let company = CompanyRepository::new(&state.db).create(name).await?;

    Ok((StatusCode::CREATED, Json(to_dto(company))))
}

/// Rename a supplier
#[utoipa::path(
    put,
    path = "/api/private/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company id")),
    request_body = UpsertCompanyDto,
    responses(
        (status = 200, description = "Company updated", body = CompanyDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto)
    )
)]
pub async fn update_company(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<UpsertCompanyDto>,
) -> Result<impl IntoResponse, Error> {
    let name = require_trimmed(&body.name, "name")?;

    let Some(company) = CompanyRepository::new(&state.db).update(id, name).await? else {
        return Err(Error::NotFound("company"));
    };

    Ok((StatusCode::OK, Json(to_dto(company))))
}

/// Delete a supplier
#[utoipa::path(
    delete,
    path = "/api/private/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 409, description = "Company still referenced by materials", body = ErrorDto)
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !CompanyRepository::new(&state.db).delete(id).await? {
        return Err(Error::NotFound("company"));
    }

    Ok(StatusCode::NO_CONTENT)
}
