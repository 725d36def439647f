//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, lookups, readers, records};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Library API",
        version = "1.0.0",
        description = "Book catalog and lending REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::get_cover,
        books::create_book,
        books::update_book,
        books::delete_books,
        books::take_copy,
        // Lookups
        lookups::list_authors,
        lookups::list_genres,
        // Readers
        readers::list_readers,
        readers::get_reader,
        readers::create_reader,
        readers::update_reader,
        // Records
        records::list_records,
        records::borrow_book,
        records::close_record,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookForm,
            crate::models::book::DeleteBooks,
            crate::models::specification::BookQuery,
            books::PaginatedBooks,
            // Lookups
            crate::models::author::Author,
            crate::models::genre::Genre,
            // Readers
            crate::models::reader::Reader,
            crate::models::reader::ReaderQuery,
            crate::models::reader::CreateReader,
            crate::models::reader::UpdateReader,
            // Records
            crate::models::record::BorrowRecord,
            crate::models::record::BorrowRequest,
            crate::models::record::CloseRecordRequest,
            crate::models::record::RecordStatus,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "lookups", description = "Authors and genres"),
        (name = "readers", description = "Reader management"),
        (name = "records", description = "Lending and returns")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
