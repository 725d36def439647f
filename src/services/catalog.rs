//! Catalog management service

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookForm, NewBook},
        genre::Genre,
        page::PageRequest,
        specification::{BookQuery, BookSpecification},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// List books, filtered when the query carries any pattern.
    /// Returns the page, the total number of matching books and the resolved page request.
    pub async fn search_books(&self, query: &BookQuery) -> AppResult<(Vec<Book>, i64, PageRequest)> {
        let page = PageRequest::new(query.page, query.per_page, &self.config);
        let specification = BookSpecification::from(query);

        let books = &self.repository.books;
        let (items, total) = if specification.is_unrestricted() {
            let items = books.list_page(page.limit(), page.offset()).await?;
            (items, books.count().await?)
        } else {
            let items = books
                .search(&specification, page.limit(), page.offset())
                .await?;
            (items, books.count_by_specification(&specification).await?)
        };

        Ok((items, total, page))
    }

    /// Get book by ID with authors and genres
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn get_cover(&self, id: i32) -> AppResult<Vec<u8>> {
        self.repository
            .books
            .cover(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} has no cover", id)))
    }

    /// Create a new book
    pub async fn create_book(&self, form: BookForm) -> AppResult<Book> {
        let book = NewBook::try_from(form)?;
        let created = self.repository.books.create(&book).await?;
        tracing::info!("Catalog create: book id={} \"{}\"", created.id, created.title);
        Ok(created)
    }

    /// Update an existing book
    pub async fn update_book(&self, id: i32, form: BookForm) -> AppResult<Book> {
        let book = NewBook::try_from(form)?;
        let updated = self.repository.books.update(id, &book).await?;
        tracing::info!("Catalog update: book id={}", id);
        Ok(updated)
    }

    /// Delete several books at once
    pub async fn delete_books(&self, ids: &[i32]) -> AppResult<u64> {
        let deleted = self.repository.books.delete(ids).await?;
        tracing::info!("Catalog delete: {} of {} book(s) removed", deleted, ids.len());
        Ok(deleted)
    }

    /// Take one copy of a book off the shelf
    pub async fn take_copy(&self, id: i32) -> AppResult<Book> {
        self.repository.books.decrement_availability(id).await?;
        self.get_book(id).await
    }

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }
}
