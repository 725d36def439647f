//! Borrow record endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::record::{BorrowRecord, BorrowRequest, CloseRecordRequest},
};

/// Get borrow records of a book
#[utoipa::path(
    get,
    path = "/books/{id}/records",
    tag = "records",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Borrow records, newest first", body = Vec<BorrowRecord>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn list_records(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Vec<BorrowRecord>>> {
    let records = state.services.loans.get_book_records(book_id).await?;
    Ok(Json(records))
}

/// Lend a copy of a book to a reader
#[utoipa::path(
    post,
    path = "/books/{id}/records",
    tag = "records",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Copy lent", body = BorrowRecord),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "No copy available")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowRecord>)> {
    request.validate()?;

    let record = state.services.loans.borrow(book_id, request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Close a borrow record
#[utoipa::path(
    put,
    path = "/records/{id}",
    tag = "records",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    request_body = CloseRecordRequest,
    responses(
        (status = 200, description = "Record closed", body = BorrowRecord),
        (status = 404, description = "Record not found"),
        (status = 422, description = "Record already closed")
    )
)]
pub async fn close_record(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CloseRecordRequest>,
) -> AppResult<Json<BorrowRecord>> {
    request.validate()?;

    let record = state.services.loans.close(id, request).await?;
    Ok(Json(record))
}
