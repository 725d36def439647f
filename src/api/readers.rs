//! Reader endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::reader::{CreateReader, Reader, ReaderQuery, UpdateReader},
};

/// Search readers by email prefix
#[utoipa::path(
    get,
    path = "/readers",
    tag = "readers",
    params(ReaderQuery),
    responses(
        (status = 200, description = "Matching readers", body = Vec<Reader>)
    )
)]
pub async fn list_readers(
    State(state): State<crate::AppState>,
    Query(query): Query<ReaderQuery>,
) -> AppResult<Json<Vec<Reader>>> {
    let readers = state.services.readers.search(&query).await?;
    Ok(Json(readers))
}

/// Get reader by ID
#[utoipa::path(
    get,
    path = "/readers/{id}",
    tag = "readers",
    params(
        ("id" = i32, Path, description = "Reader ID")
    ),
    responses(
        (status = 200, description = "Reader details", body = Reader),
        (status = 404, description = "Reader not found")
    )
)]
pub async fn get_reader(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Reader>> {
    let reader = state.services.readers.get_reader(id).await?;
    Ok(Json(reader))
}

/// Register a reader
#[utoipa::path(
    post,
    path = "/readers",
    tag = "readers",
    request_body = CreateReader,
    responses(
        (status = 201, description = "Reader created", body = Reader),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_reader(
    State(state): State<crate::AppState>,
    Json(reader): Json<CreateReader>,
) -> AppResult<(StatusCode, Json<Reader>)> {
    reader.validate()?;

    let created = state.services.readers.create_reader(reader).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Rename a reader
#[utoipa::path(
    put,
    path = "/readers/{id}",
    tag = "readers",
    params(
        ("id" = i32, Path, description = "Reader ID")
    ),
    request_body = UpdateReader,
    responses(
        (status = 200, description = "Reader updated", body = Reader),
        (status = 404, description = "Reader not found")
    )
)]
pub async fn update_reader(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(reader): Json<UpdateReader>,
) -> AppResult<Json<Reader>> {
    reader.validate()?;

    let updated = state.services.readers.update_reader(id, reader).await?;
    Ok(Json(updated))
}
