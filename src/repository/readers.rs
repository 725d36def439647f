//! Readers repository for database operations

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::AppResult,
    models::reader::{CreateReader, Reader},
};

/// Escape LIKE wildcards so user input is matched literally
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[derive(Clone)]
pub struct ReadersRepository {
    pool: Pool<Postgres>,
}

impl ReadersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Readers whose email starts with `prefix`, for autocompletion
    pub async fn search(&self, prefix: &str, limit: i64) -> AppResult<Vec<Reader>> {
        let readers = sqlx::query_as::<_, Reader>(
            r#"
            SELECT id, email, name FROM reader
            WHERE email ILIKE $1 || '%'
            ORDER BY email
            LIMIT $2
            "#,
        )
        .bind(escape_like(prefix))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(readers)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Reader>> {
        let reader = sqlx::query_as::<_, Reader>("SELECT id, email, name FROM reader WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(reader)
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Reader>> {
        let reader =
            sqlx::query_as::<_, Reader>("SELECT id, email, name FROM reader WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(reader)
    }

    pub async fn create(&self, reader: &CreateReader) -> AppResult<Reader> {
        let created = sqlx::query_as::<_, Reader>(
            "INSERT INTO reader (email, name) VALUES ($1, $2) RETURNING id, email, name",
        )
        .bind(reader.email.trim())
        .bind(reader.name.trim())
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Rename a reader; `None` when the reader does not exist
    pub async fn update_name(&self, id: i32, name: &str) -> AppResult<Option<Reader>> {
        let updated = sqlx::query_as::<_, Reader>(
            "UPDATE reader SET name = $1 WHERE id = $2 RETURNING id, email, name",
        )
        .bind(name.trim())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }
}

/// Find a reader by email, creating it if needed; the name is refreshed
pub(crate) async fn upsert_by_email(
    conn: &mut PgConnection,
    email: &str,
    name: &str,
) -> AppResult<Reader> {
    let reader = sqlx::query_as::<_, Reader>(
        r#"
        INSERT INTO reader (email, name) VALUES ($1, $2)
        ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, email, name
        "#,
    )
    .bind(email.trim())
    .bind(name.trim())
    .fetch_one(&mut *conn)
    .await?;
    Ok(reader)
}
