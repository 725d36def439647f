//! Book model, its form DTO and the conversion between them

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDate;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{author::Author, genre::Genre};
use crate::error::AppError;

static ISBN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{9}[\dX]|\d{13})$").expect("ISBN pattern is valid")
});

/// Book as stored in the `book` table, with its linked authors and genres
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub publisher: String,
    pub publish_date: NaiveDate,
    pub page_count: i32,
    pub isbn: String,
    pub description: String,
    /// Raw image bytes, served separately by `/books/{id}/cover`
    #[serde(skip)]
    pub cover: Option<Vec<u8>>,
    /// Copies currently on the shelf
    pub available: i32,
    /// Copies owned by the library
    pub total_amount: i32,
    // Relations (filled by the flattening pass)
    #[sqlx(skip)]
    pub authors: Vec<Author>,
    #[sqlx(skip)]
    pub genres: Vec<Genre>,
}

/// One row of the book/author/genre outer join.
///
/// A book with several authors and genres comes back as one row per
/// (author, genre) pair; a book with none comes back once with null columns.
#[derive(Debug, Clone, FromRow)]
pub struct BookJoinRow {
    #[sqlx(flatten)]
    pub book: Book,
    pub author_id: Option<i32>,
    pub author_name: Option<String>,
    pub genre_id: Option<i32>,
    pub genre_name: Option<String>,
}

/// Book values ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub publisher: String,
    pub publish_date: NaiveDate,
    pub page_count: i32,
    pub isbn: String,
    pub description: String,
    pub cover: Option<Vec<u8>>,
    pub available: i32,
    pub total_amount: i32,
    /// `None` leaves existing links untouched on update
    pub authors: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
}

/// Create/update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookForm {
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "Publisher must be 1 to 255 characters"))]
    pub publisher: String,
    pub publish_date: NaiveDate,
    #[validate(range(min = 1, max = 100000, message = "Page count must be between 1 and 100000"))]
    pub page_count: i32,
    /// ISBN-10 or ISBN-13, hyphens and spaces allowed
    pub isbn: String,
    #[serde(default)]
    #[validate(length(max = 4000, message = "Description is limited to 4000 characters"))]
    pub description: String,
    /// Base64-encoded cover image
    pub cover: Option<String>,
    #[validate(range(min = 0, max = 10000, message = "Total amount must be between 0 and 10000"))]
    pub total_amount: i32,
    /// Copies on the shelf. Defaults to `total_amount` on creation; on update
    /// availability follows the change of `total_amount` instead.
    pub available: Option<i32>,
    pub authors: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
}

/// Most ids one bulk delete accepts; each id is one bind parameter
pub const MAX_DELETE_IDS: usize = 1000;

/// Bulk delete request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteBooks {
    #[validate(length(min = 1, max = 1000, message = "Between 1 and 1000 book ids are required"))]
    pub ids: Vec<i32>,
}

/// Strip separators from an ISBN and check its shape
pub fn normalize_isbn(isbn: &str) -> Option<String> {
    let cleaned: String = isbn
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    ISBN_RE.is_match(&cleaned).then_some(cleaned)
}

/// Trim names, drop blanks and duplicates, keep first-seen order
fn clean_names(names: Option<Vec<String>>) -> Option<Vec<String>> {
    names.map(|names| {
        names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    })
}

impl TryFrom<BookForm> for NewBook {
    type Error = AppError;

    fn try_from(form: BookForm) -> Result<Self, Self::Error> {
        let isbn = normalize_isbn(&form.isbn)
            .ok_or_else(|| AppError::Validation(format!("Invalid ISBN: {}", form.isbn)))?;

        let cover = form
            .cover
            .filter(|c| !c.is_empty())
            .map(|c| STANDARD.decode(c.as_bytes()))
            .transpose()
            .map_err(|e| AppError::Validation(format!("Cover is not valid base64: {}", e)))?;

        let available = form.available.unwrap_or(form.total_amount);
        if available < 0 || available > form.total_amount {
            return Err(AppError::Validation(format!(
                "Available copies ({}) must be between 0 and the total amount ({})",
                available, form.total_amount
            )));
        }

        Ok(NewBook {
            title: form.title.trim().to_string(),
            publisher: form.publisher.trim().to_string(),
            publish_date: form.publish_date,
            page_count: form.page_count,
            isbn,
            description: form.description,
            cover,
            available,
            total_amount: form.total_amount,
            authors: clean_names(form.authors),
            genres: clean_names(form.genres),
        })
    }
}
