//! Book library catalog server
//!
//! A REST JSON API over a PostgreSQL book catalog: filtered and paginated
//! book search, authors and genres, readers and lending records.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
