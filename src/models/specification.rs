//! Book search specification

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Book listing query parameters (API)
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Pattern matched against the title
    pub title: Option<String>,
    /// Pattern matched against any author name
    pub authors: Option<String>,
    /// Pattern matched against any genre name
    pub genres: Option<String>,
    /// Pattern matched against the description
    pub description: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Four case-insensitive regular expressions in PostgreSQL syntax; a book
/// qualifies when all of them match. An empty pattern matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSpecification {
    pub title: String,
    pub authors: String,
    pub genres: String,
    pub description: String,
}

impl BookSpecification {
    /// True when no pattern restricts the result
    pub fn is_unrestricted(&self) -> bool {
        [&self.title, &self.authors, &self.genres, &self.description]
            .iter()
            .all(|p| p.is_empty())
    }
}

impl From<&BookQuery> for BookSpecification {
    fn from(query: &BookQuery) -> Self {
        let pattern = |p: &Option<String>| p.as_deref().map(str::trim).unwrap_or_default().to_string();
        Self {
            title: pattern(&query.title),
            authors: pattern(&query.authors),
            genres: pattern(&query.genres),
            description: pattern(&query.description),
        }
    }
}
