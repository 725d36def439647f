//! Reader management service

use crate::{
    error::{AppError, AppResult},
    models::reader::{CreateReader, Reader, ReaderQuery, UpdateReader},
    repository::Repository,
};

const DEFAULT_SEARCH_LIMIT: i64 = 10;
const MAX_SEARCH_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct ReadersService {
    repository: Repository,
}

impl ReadersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn search(&self, query: &ReaderQuery) -> AppResult<Vec<Reader>> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);
        let prefix = query.email.as_deref().unwrap_or_default().trim();
        self.repository.readers.search(prefix, limit).await
    }

    pub async fn get_reader(&self, id: i32) -> AppResult<Reader> {
        self.repository
            .readers
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", id)))
    }

    /// Create a reader; emails are unique
    pub async fn create_reader(&self, reader: CreateReader) -> AppResult<Reader> {
        if self
            .repository
            .readers
            .get_by_email(reader.email.trim())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "A reader with email {} already exists",
                reader.email
            )));
        }

        let created = self.repository.readers.create(&reader).await?;
        tracing::info!("Reader created: id={}", created.id);
        Ok(created)
    }

    pub async fn update_reader(&self, id: i32, reader: UpdateReader) -> AppResult<Reader> {
        self.repository
            .readers
            .update_name(id, &reader.name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", id)))
    }
}
