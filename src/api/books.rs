//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookForm, DeleteBooks},
        specification::BookQuery,
    },
};

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
#[aliases(PaginatedBooks = PaginatedResponse<Book>)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Books on the requested page
    pub items: Vec<T>,
    /// Total number of matching books
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Books per page
    pub per_page: i64,
    /// Number of pages for `total`
    pub page_count: i64,
}

/// List books, optionally filtered by case-insensitive regular expressions
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Page of books", body = PaginatedBooks),
        (status = 400, description = "Invalid filter pattern", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<PaginatedResponse<Book>>> {
    let (items, total, page) = state.services.catalog.search_books(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page: page.page,
        per_page: page.per_page,
        page_count: page.page_count(total),
    }))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Get the cover image of a book
#[utoipa::path(
    get,
    path = "/books/{id}/cover",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Cover bytes", content_type = "application/octet-stream"),
        (status = 404, description = "Book or cover not found")
    )
)]
pub async fn get_cover(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let cover = state.services.catalog.get_cover(id).await?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], cover))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookForm,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Book already exists")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(form): Json<BookForm>,
) -> AppResult<(StatusCode, Json<Book>)> {
    form.validate()?;

    let created = state.services.catalog.create_book(form).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BookForm,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Total amount below copies on loan")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(form): Json<BookForm>,
) -> AppResult<Json<Book>> {
    form.validate()?;

    let updated = state.services.catalog.update_book(id, form).await?;
    Ok(Json(updated))
}

/// Delete several books at once
#[utoipa::path(
    delete,
    path = "/books",
    tag = "books",
    request_body = DeleteBooks,
    responses(
        (status = 204, description = "Books deleted"),
        (status = 400, description = "No book id given")
    )
)]
pub async fn delete_books(
    State(state): State<crate::AppState>,
    Json(request): Json<DeleteBooks>,
) -> AppResult<StatusCode> {
    request.validate()?;

    state.services.catalog.delete_books(&request.ids).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Take one copy of a book off the shelf
#[utoipa::path(
    post,
    path = "/books/{id}/take",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book with updated availability", body = Book),
        (status = 404, description = "Book not found"),
        (status = 409, description = "No copy available")
    )
)]
pub async fn take_copy(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.take_copy(id).await?;
    Ok(Json(book))
}
