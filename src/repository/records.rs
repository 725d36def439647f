//! Borrow records repository.
//!
//! Borrowing and closing a record touch the book's copy counters too; each
//! runs in a single transaction.

use chrono::NaiveDate;
use sqlx::{PgConnection, Pool, Postgres};

use super::{books, readers};
use crate::{
    error::{AppError, AppResult},
    models::record::{due_date, BorrowRecord, BorrowRequest, CloseRecordRequest, RecordStatus},
};

const SELECT_RECORD: &str = r#"
    SELECT r.id, r.book_id, r.reader_id, rd.email AS reader_email, rd.name AS reader_name,
           r.borrow_date, r.period_months, r.due_date, r.return_date, r.status, r.comment
    FROM borrow_record r
    JOIN reader rd ON rd.id = r.reader_id
"#;

#[derive(Clone)]
pub struct RecordsRepository {
    pool: Pool<Postgres>,
}

impl RecordsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Records of a book, newest first
    pub async fn list_for_book(&self, book_id: i32) -> AppResult<Vec<BorrowRecord>> {
        let query = format!("{} WHERE r.book_id = $1 ORDER BY r.borrow_date DESC, r.id DESC", SELECT_RECORD);
        let records = sqlx::query_as::<_, BorrowRecord>(&query)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    /// Lend one copy of a book: take the copy, register the reader, write the record
    pub async fn borrow(
        &self,
        book_id: i32,
        request: &BorrowRequest,
        today: NaiveDate,
    ) -> AppResult<BorrowRecord> {
        let due = due_date(today, request.period_months).ok_or_else(|| {
            AppError::Validation(format!("Invalid loan period: {}", request.period_months))
        })?;

        let mut tx = self.pool.begin().await?;

        books::take_copy(&mut tx, book_id).await?;
        let reader = readers::upsert_by_email(&mut tx, &request.email, &request.name).await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO borrow_record (book_id, reader_id, borrow_date, period_months, due_date, status, comment)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(book_id)
        .bind(reader.id)
        .bind(today)
        .bind(request.period_months)
        .bind(due)
        .bind(RecordStatus::Borrowed)
        .bind(&request.comment)
        .fetch_one(&mut *tx)
        .await?;

        let record = fetch_record(&mut tx, id).await?;
        tx.commit().await?;

        Ok(record)
    }

    /// Close an open record. Returned and damaged copies go back on the
    /// shelf; a lost copy is removed from the book's total.
    pub async fn close(
        &self,
        id: i32,
        request: &CloseRecordRequest,
        today: NaiveDate,
    ) -> AppResult<BorrowRecord> {
        let mut tx = self.pool.begin().await?;

        let (book_id, status) = sqlx::query_as::<_, (i32, RecordStatus)>(
            "SELECT book_id, status FROM borrow_record WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Borrow record {} not found", id)))?;

        if status != RecordStatus::Borrowed {
            return Err(AppError::BusinessRule(format!(
                "Borrow record {} is already closed",
                id
            )));
        }

        sqlx::query(
            r#"
            UPDATE borrow_record
            SET status = $1, return_date = $2, comment = COALESCE($3, comment)
            WHERE id = $4
            "#,
        )
        .bind(request.status)
        .bind(today)
        .bind(&request.comment)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if request.status.restores_copy() {
            books::restore_copy(&mut tx, book_id).await?;
        } else {
            books::write_off_copy(&mut tx, book_id).await?;
        }

        let record = fetch_record(&mut tx, id).await?;
        tx.commit().await?;

        Ok(record)
    }
}

async fn fetch_record(conn: &mut PgConnection, id: i32) -> AppResult<BorrowRecord> {
    let query = format!("{} WHERE r.id = $1", SELECT_RECORD);
    let record = sqlx::query_as::<_, BorrowRecord>(&query)
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(record)
}
