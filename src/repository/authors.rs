//! Authors repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{error::AppResult, models::author::Author};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all authors ordered by name
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT id, name FROM author ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }
}

/// Insert author if new, or return existing id.
pub(crate) async fn ensure_by_name(conn: &mut PgConnection, name: &str) -> AppResult<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO author (name) VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;
    Ok(id)
}
