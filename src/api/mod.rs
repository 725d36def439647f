//! API handlers for the book library REST endpoints

pub mod books;
pub mod health;
pub mod lookups;
pub mod openapi;
pub mod readers;
pub mod records;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .delete(books::delete_books),
        )
        .route("/books/:id", get(books::get_book).put(books::update_book))
        .route("/books/:id/cover", get(books::get_cover))
        .route("/books/:id/take", post(books::take_copy))
        // Records
        .route(
            "/books/:id/records",
            get(records::list_records).post(records::borrow_book),
        )
        .route("/records/:id", put(records::close_record))
        // Lookups
        .route("/authors", get(lookups::list_authors))
        .route("/genres", get(lookups::list_genres))
        // Readers
        .route(
            "/readers",
            get(readers::list_readers).post(readers::create_reader),
        )
        .route(
            "/readers/:id",
            get(readers::get_reader).put(readers::update_reader),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
