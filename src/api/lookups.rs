//! Author and genre lookup endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{author::Author, genre::Genre},
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "lookups",
    responses(
        (status = 200, description = "Authors ordered by name", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Author>>> {
    Ok(Json(state.services.catalog.list_authors().await?))
}

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    tag = "lookups",
    responses(
        (status = 200, description = "Genres ordered by name", body = Vec<Genre>)
    )
)]
pub async fn list_genres(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(state.services.catalog.list_genres().await?))
}
